//! Generator configuration file (`restgen.toml`).

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root of the generator configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix stripped once from every operation id before naming.
    pub operation_prefix: Option<String>,

    /// First line of the generated artifact.
    pub banner: Option<String>,

    /// Opaque sub-namespace tag passed through to the output metadata.
    pub namespace: Option<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "restgen.toml")
    }
}

impl Config {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

impl GeneratorConfig {
    /// The banner is written verbatim as the first line, so it must be a
    /// line comment or one closed block comment.
    fn check_banner(&self, source_ctx: &SourceContext) -> Result<()> {
        match self.banner.as_deref() {
            Some(banner) if !is_comment(banner) => Err(source_ctx.invalid_banner_error(banner)),
            _ => Ok(()),
        }
    }
}

fn is_comment(text: &str) -> bool {
    if text.starts_with("/*") {
        text.len() >= 4 && text.ends_with("*/") && !text[2..text.len() - 2].contains("*/")
    } else {
        text.starts_with("//") && !text.contains('\n')
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.config_error(e))?;
    config.generator.check_banner(&source_ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: Config = "".parse().unwrap();
        assert!(config.generator.operation_prefix.is_none());
        assert!(config.generator.banner.is_none());
    }

    #[test]
    fn test_generator_table() {
        let config: Config = r#"
[generator]
operation_prefix = "Nakama_"
banner = "// generated"
namespace = "api"
"#
        .parse()
        .unwrap();

        assert_eq!(config.generator.operation_prefix.as_deref(), Some("Nakama_"));
        assert_eq!(config.generator.banner.as_deref(), Some("// generated"));
        assert_eq!(config.generator.namespace.as_deref(), Some("api"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_str("[generator]\nprefix = \"x\"\n").unwrap_err();
        match *err {
            Error::Config { span, .. } => assert!(span.is_some()),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_must_be_comment() {
        let err = Config::from_str("[generator]\nbanner = \"generated\"\n").unwrap_err();
        match *err {
            Error::InvalidBanner { banner, span, .. } => {
                assert_eq!(banner, "generated");
                assert_eq!(span.map(|s| s.offset()), Some(12));
            }
            other => panic!("Expected InvalidBanner error, got {other:?}"),
        }
    }

    #[test]
    fn test_banner_comment_forms() {
        assert!(is_comment("// generated"));
        assert!(is_comment("/* Code generated by restgen. DO NOT EDIT. */"));
        assert!(is_comment("/* line one\n   line two */"));
        assert!(!is_comment("// one\ntwo"));
        assert!(!is_comment("/* open"));
        assert!(!is_comment("/*/"));
        assert!(!is_comment("/* a */ b */"));
        assert!(!is_comment("# generated"));
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("restgen.toml");
        std::fs::write(&path, "[generator]\nnamespace = \"satori\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.generator.namespace.as_deref(), Some("satori"));
    }
}
