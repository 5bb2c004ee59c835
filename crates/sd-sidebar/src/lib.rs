//! Sidebar navigation tree for SD site declarations.
//!
//! This crate provides:
//! - [`Sidebar`]: the ordered root of the navigation tree
//! - [`SidebarItem`]: a node, either a [`Group`] or a [`Link`]
//! - Depth-first traversal ([`Walk`]) and flattening ([`FlatEntry`])
//! - Structural checks ([`Sidebar::check`], [`Sidebar::validate`])
//!
//! # Quick Start
//!
//! ```
//! use sd_sidebar::{FlatEntry, Group, Sidebar};
//!
//! let sidebar = Sidebar::new(vec![
//!     Group::new("Lệnh")
//!         .link("Lệnh người chơi", "/commands/player-commands/")
//!         .link("Lệnh admin", "/commands/admin-commands/")
//!         .into(),
//! ]);
//!
//! assert!(sidebar.validate().is_ok());
//! assert_eq!(sidebar.flatten()[0], FlatEntry::new(0, "Lệnh", None));
//! ```

mod flat;
mod item;
mod sidebar;
mod walk;

pub use flat::FlatEntry;
pub use item::{Group, Link, SidebarItem};
pub use sidebar::{Sidebar, SidebarError, SidebarIssue};
pub use walk::Walk;
