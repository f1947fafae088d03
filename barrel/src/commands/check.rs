use clap::Args;
use eyre::Result;

use super::{CatalogArgs, UnwrapOrExit};
use crate::ops;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub(super) catalog: CatalogArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let configs = self.catalog.configs();
        let report = ops::check(&configs).unwrap_or_exit();

        self.catalog.print(&report)?;

        if !report.is_current() {
            std::process::exit(1);
        }

        Ok(())
    }
}
