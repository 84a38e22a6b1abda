//! Merging of config file values and command-line flags.

use restgen_codegen::GenerateOptions;
use restgen_schema::GeneratorConfig;

/// Values given on the command line. Each one replaces the config file value.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub operation_prefix: Option<&'a str>,
    pub namespace: Option<&'a str>,
}

pub fn generate_options(config: &GeneratorConfig, overrides: Overrides<'_>) -> GenerateOptions {
    let defaults = GenerateOptions::default();
    GenerateOptions {
        operation_prefix: overrides
            .operation_prefix
            .map(str::to_string)
            .or_else(|| config.operation_prefix.clone()),
        namespace: overrides
            .namespace
            .map(str::to_string)
            .or_else(|| config.namespace.clone()),
        banner: config.banner.clone().unwrap_or(defaults.banner),
    }
}
