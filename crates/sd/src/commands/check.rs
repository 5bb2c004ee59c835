//! `sd check` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Treat duplicate link paths as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration fails to load or validate, or if
    /// `--strict` is set and link paths repeat.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Declaration: {}", path.display()));
        }
        output.info(&format!("Title: {}", config.title));
        output.info(&format!("Site: {}", config.site));
        match config.default_locale() {
            Some(locale) => output.info(&format!(
                "Locales: {} (default: {} / {})",
                config.locales.len(),
                locale.label,
                locale.lang
            )),
            None => output.info("Locales: none"),
        }
        output.info(&format!(
            "Sidebar: {} top-level items, {} links",
            config.sidebar.len(),
            config.sidebar.links().count()
        ));

        let duplicates = config.sidebar.duplicate_paths();
        for path in &duplicates {
            tracing::warn!(path, "Link path appears more than once");
            output.warning(&format!("Warning: {path} is linked more than once"));
        }

        if self.strict && !duplicates.is_empty() {
            return Err(CliError::Validation(format!(
                "{} duplicate link path(s)",
                duplicates.len()
            )));
        }

        output.success("Declaration is valid");
        Ok(())
    }
}
