use clap::Args;
use eyre::Result;

use super::{CatalogArgs, UnwrapOrExit};
use crate::ops::{self, GenerateOptions};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub(super) catalog: CatalogArgs,

    /// Print the catalog instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// List every module in each catalog
    #[arg(short, long)]
    verbose: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let configs = self.catalog.configs();
        let report = ops::generate(
            &configs,
            GenerateOptions {
                dry_run: self.dry_run,
                verbose: self.verbose,
            },
        )
        .unwrap_or_exit();

        self.catalog.print(&report)
    }
}
