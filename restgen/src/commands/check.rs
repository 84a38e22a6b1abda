use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use restgen_schema::{Config, SchemaFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the Swagger JSON document
    pub input: PathBuf,

    /// Path to a restgen.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the lowered IR as JSON
    #[arg(long)]
    pub ir: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::from_file(path).unwrap_or_exit(),
            None => Config::default(),
        };
        let options = ops::generate_options(&config.generator, Overrides::default());

        let document = SchemaFile::open(&self.input)
            .unwrap_or_exit()
            .into_document();

        let report = ops::check(document, options, &self.input, self.ir)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
