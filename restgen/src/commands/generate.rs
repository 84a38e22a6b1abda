use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use restgen_schema::{Config, SchemaFile};

use super::{UnwrapOrExit, non_empty};
use crate::{
    ops::{self, GenerateTarget, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the Swagger JSON document
    pub input: PathBuf,

    /// Sub-namespace tag recorded in the output metadata
    #[arg(value_parser = non_empty)]
    pub namespace: Option<String>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a restgen.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prefix stripped once from every operation id before naming
    #[arg(long)]
    pub operation_prefix: Option<String>,

    /// Print generated code to stdout even when an output file is given
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::from_file(path).unwrap_or_exit(),
            None => Config::default(),
        };
        let options = ops::generate_options(
            &config.generator,
            Overrides {
                operation_prefix: self.operation_prefix.as_deref(),
                namespace: self.namespace.as_deref(),
            },
        );

        let document = SchemaFile::open(&self.input)
            .unwrap_or_exit()
            .into_document();

        let target = match &self.output {
            Some(path) if !self.dry_run => GenerateTarget::File(path),
            _ => GenerateTarget::Stdout,
        };

        let report = ops::generate(document, options, target)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
