//! `sd export` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// Prints the declaration as JSON under the site generator's option names.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration fails to load or serialize.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load()?;
        let json = config.export().to_json(self.pretty)?;
        Output::new().print(&json);
        Ok(())
    }
}
