//! `sd sidebar` command implementation.

use clap::Args;
use sd_sidebar::{FlatEntry, Sidebar, SidebarItem};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Indentation per tree level.
const INDENT: &str = "  ";

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print `[depth, label, path]` tuples as JSON instead of a tree.
    #[arg(long)]
    flat: bool,

    /// Only print the top-level group with this label.
    #[arg(short, long)]
    group: Option<String>,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration fails to load or the requested
    /// group does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        let entries = select_entries(&config.sidebar, self.group.as_deref())?;

        if self.flat {
            output.print(&serde_json::to_string(&entries)?);
            return Ok(());
        }

        for entry in &entries {
            let line = render_entry(entry);
            if entry.path.is_none() {
                output.print_highlight(&line);
            } else {
                output.print(&line);
            }
        }
        Ok(())
    }
}

/// Flatten the whole sidebar, or only the top-level group named `group`.
fn select_entries<'a>(
    sidebar: &'a Sidebar,
    group: Option<&str>,
) -> Result<Vec<FlatEntry<'a>>, CliError> {
    let Some(label) = group else {
        return Ok(sidebar.flatten());
    };

    sidebar
        .items()
        .iter()
        .find(|item| matches!(item, SidebarItem::Group(g) if g.label == label))
        .map(SidebarItem::flatten)
        .ok_or_else(|| CliError::Validation(format!("No top-level sidebar group named \"{label}\"")))
}

/// Render one tree line: groups show their label, links add their route.
fn render_entry(entry: &FlatEntry<'_>) -> String {
    let indent = INDENT.repeat(entry.depth);
    match entry.path {
        Some(path) => format!("{indent}{}  {path}", entry.label),
        None => format!("{indent}{}", entry.label),
    }
}
