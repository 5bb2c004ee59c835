//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use sd_config::{CliSettings, SiteConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use sidebar::SidebarArgs;

/// Declaration arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to the site declaration (default: auto-discover sd.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canonical site URL (overrides declaration).
    #[arg(long, env = "SD_SITE")]
    site: Option<String>,
}

impl ConfigArgs {
    /// Load the declaration with CLI overrides applied.
    pub(crate) fn load(self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings { site: self.site };
        Ok(SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
