//! Generator configuration.
//!
//! Prisma passes generator options as raw strings from the schema's
//! generator block:
//!
//! ```prisma
//! generator zod {
//!   provider      = "zodgen serve"
//!   output        = "../src/generated/zod"
//!   multipleFiles = "true"
//!   coerceDate    = "false"
//! }
//! ```
//!
//! Outside Prisma the same keys can come from a TOML file:
//!
//! ```toml
//! output = "src/generated/zod"
//! multipleFiles = true
//! coerceDate = "false"
//! ```

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use zodgen_dmmf::{ConfigValue, GeneratorConfig};
use zodgen_typegen::LowerOptions;

pub const DEFAULT_OUTPUT: &str = "./generated/zod";

/// Raw key/value configuration, as supplied by the host.
pub type RawConfig = BTreeMap<String, ConfigValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory generated files are written to.
    pub output: PathBuf,
    /// One file per model and enum plus an index, instead of a single `index.ts`.
    pub multiple_files: bool,
    /// `z.coerce.date()` rather than `z.date()` for `DateTime` fields.
    pub coerce_date: bool,
    /// Accepted for compatibility; input schemas are not generated.
    pub create_input_types: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_raw(&RawConfig::new(), None)
    }
}

impl Config {
    /// Build a config from raw values. `output` takes precedence over an
    /// `output` key in `raw`. Unrecognized keys are ignored.
    pub fn from_raw(raw: &RawConfig, output: Option<PathBuf>) -> Self {
        let get = |key: &str| raw.get(key).and_then(ConfigValue::as_str);

        Self {
            output: output
                .or_else(|| get("output").map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            multiple_files: get("multipleFiles") == Some("true"),
            coerce_date: get("coerceDate") != Some("false"),
            create_input_types: get("createInputTypes") == Some("true"),
        }
    }

    /// Config for a Prisma `generate` request.
    pub fn from_generator(generator: &GeneratorConfig) -> Self {
        Self::from_raw(
            &generator.config,
            generator.output_path().map(PathBuf::from),
        )
    }

    pub fn lower_options(&self) -> LowerOptions {
        LowerOptions {
            coerce_date: self.coerce_date,
        }
    }
}

/// Load raw configuration from a TOML file.
///
/// Strings are taken as-is and booleans become `"true"`/`"false"`, so
/// `multipleFiles = true` and `multipleFiles = "true"` are equivalent.
pub fn load_file(path: &Path) -> Result<RawConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, config_value(value)))
        .collect())
}

fn config_value(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::Single(s),
        toml::Value::Array(items) => ConfigValue::List(
            items
                .into_iter()
                .map(|item| match item {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        other => ConfigValue::Single(other.to_string()),
    }
}

/// Parse a `key=value` override from the command line.
pub fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{s}`"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn raw(pairs: &[(&str, &str)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), ConfigValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("./generated/zod"));
        assert!(!config.multiple_files);
        assert!(config.coerce_date);
        assert!(!config.create_input_types);
    }

    #[test]
    fn test_boolean_strings() {
        let config = Config::from_raw(
            &raw(&[
                ("multipleFiles", "true"),
                ("coerceDate", "false"),
                ("createInputTypes", "true"),
            ]),
            None,
        );
        assert!(config.multiple_files);
        assert!(!config.coerce_date);
        assert!(config.create_input_types);
    }

    #[test]
    fn test_only_exact_strings_flip_flags() {
        let config = Config::from_raw(
            &raw(&[("multipleFiles", "yes"), ("coerceDate", "FALSE")]),
            None,
        );
        assert!(!config.multiple_files);
        assert!(config.coerce_date);

        let mut list = RawConfig::new();
        list.insert(
            "coerceDate".into(),
            ConfigValue::List(vec!["false".into()]),
        );
        assert!(Config::from_raw(&list, None).coerce_date);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::from_raw(&raw(&[("prettier", "true")]), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_output_precedence() {
        let values = raw(&[("output", "from-file")]);
        assert_eq!(
            Config::from_raw(&values, None).output,
            PathBuf::from("from-file")
        );
        assert_eq!(
            Config::from_raw(&values, Some(PathBuf::from("from-cli"))).output,
            PathBuf::from("from-cli")
        );
    }

    #[test]
    fn test_from_generator() {
        let generator: GeneratorConfig = serde_json::from_value(serde_json::json!({
            "name": "zod",
            "output": { "value": "/srv/app/zod", "fromEnvVar": null },
            "config": { "multipleFiles": "true" }
        }))
        .unwrap();
        let config = Config::from_generator(&generator);
        assert_eq!(config.output, PathBuf::from("/srv/app/zod"));
        assert!(config.multiple_files);
        assert!(config.lower_options().coerce_date);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zodgen.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
output = "src/zod"
multipleFiles = true
coerceDate = "false"
"#
        )
        .unwrap();

        let config = Config::from_raw(&load_file(&path).unwrap(), None);
        assert_eq!(config.output, PathBuf::from("src/zod"));
        assert!(config.multiple_files);
        assert!(!config.coerce_date);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zodgen.toml");
        std::fs::write(&path, "multipleFiles = [").unwrap();
        assert!(matches!(load_file(&path), Err(Error::Config { .. })));
        assert!(matches!(
            load_file(&dir.path().join("missing.toml")),
            Err(Error::Read { .. })
        ));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("coerceDate=false"),
            Ok(("coerceDate".to_string(), "false".to_string()))
        );
        assert!(parse_assignment("coerceDate").is_err());
        assert!(parse_assignment("=true").is_err());
    }
}
