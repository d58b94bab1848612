//! Reading a single source document from disk

use super::error::ConfigError;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Key naming further documents to merge underneath the one that declares it.
pub const EXTERNAL_CONFIG_KEY: &str = "external_config";

/// Format of a source document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// YAML is a JSON superset, so anything that is not `.toml` goes through the YAML parser.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Read and parse `path` into a top-level mapping.
pub fn read_document(path: &Path) -> Result<Mapping, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_document(&content, DocumentFormat::from_path(path), path)
}

pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<Mapping, ConfigError> {
    let raw: Value = match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::parse(path, e))?
        }
        DocumentFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| ConfigError::parse(path, e))?;
            serde_yaml::to_value(table).map_err(|e| ConfigError::parse(path, e))?
        }
    };

    match raw {
        // An empty file contributes nothing
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ConfigError::parse(
            path,
            format!("top level must be a mapping, found {}", value_kind(&other)),
        )),
    }
}

/// Serialize `value` in `format`, the inverse of [`parse_document`].
pub fn render_document<T: Serialize>(
    value: &T,
    format: DocumentFormat,
) -> Result<String, ConfigError> {
    let rendered = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::to_string(value).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| ConfigError::Invalid { message })
}

/// Remove and return the `external_config` entries of a document, in declaration order.
pub fn take_external_refs(doc: &mut Mapping, path: &Path) -> Result<Vec<String>, ConfigError> {
    let Some(value) = doc.remove(EXTERNAL_CONFIG_KEY) else {
        return Ok(Vec::new());
    };

    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(single) => Ok(vec![single]),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(ConfigError::parse(
                    path,
                    format!(
                        "`{}` entries must be strings, found {}",
                        EXTERNAL_CONFIG_KEY,
                        value_kind(&other)
                    ),
                )),
            })
            .collect(),
        other => Err(ConfigError::parse(
            path,
            format!(
                "`{}` must be a list of paths, found {}",
                EXTERNAL_CONFIG_KEY,
                value_kind(&other)
            ),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn yaml(content: &str) -> Result<Mapping, ConfigError> {
        parse_document(content, DocumentFormat::Yaml, Path::new("test.yml"))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.YAML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new(".flitz")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        assert!(yaml("").expect("empty").is_empty());
        assert!(yaml("# only a comment\n").expect("comment").is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = yaml("font_size: [1, 2\n").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_top_level_is_parse_error() {
        let err = yaml("- a\n- b\n").expect_err("should fail");
        match err {
            ConfigError::Parse { message, .. } => assert!(message.contains("a list")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_toml_document_becomes_mapping() {
        let doc = parse_document(
            "font_size = 12\nexternal_config = [\"a.yml\"]\n\n[window]\nwidth = 900\n",
            DocumentFormat::Toml,
            Path::new("test.toml"),
        )
        .expect("toml");
        assert_eq!(doc.get("font_size"), Some(&Value::from(12)));
        let window = doc.get("window").and_then(Value::as_mapping).expect("window");
        assert_eq!(window.get("width"), Some(&Value::from(900)));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = parse_document("font_size = = 3", DocumentFormat::Toml, Path::new("x.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_take_external_refs_list() {
        let mut doc = yaml("external_config:\n  - a.yml\n  - b.yml\nfont_size: 3\n").expect("doc");
        let refs = take_external_refs(&mut doc, Path::new("test.yml")).expect("refs");
        assert_eq!(refs, vec!["a.yml".to_string(), "b.yml".to_string()]);
        assert!(doc.get(EXTERNAL_CONFIG_KEY).is_none());
        assert!(doc.get("font_size").is_some());
    }

    #[test]
    fn test_take_external_refs_single_string_and_null() {
        let mut doc = yaml("external_config: a.yml\n").expect("doc");
        assert_eq!(take_external_refs(&mut doc, Path::new("t.yml")).expect("refs"), vec!["a.yml"]);

        let mut doc = yaml("external_config:\n").expect("doc");
        assert!(take_external_refs(&mut doc, Path::new("t.yml")).expect("refs").is_empty());

        let mut doc = yaml("font_size: 1\n").expect("doc");
        assert!(take_external_refs(&mut doc, Path::new("t.yml")).expect("refs").is_empty());
    }

    #[test]
    fn test_take_external_refs_rejects_bad_shapes() {
        let mut doc = yaml("external_config: 5\n").expect("doc");
        assert!(matches!(
            take_external_refs(&mut doc, Path::new("t.yml")),
            Err(ConfigError::Parse { .. })
        ));

        let mut doc = yaml("external_config: [a.yml, 3]\n").expect("doc");
        assert!(matches!(
            take_external_refs(&mut doc, Path::new("t.yml")),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_read_document_missing_file_is_io_error() {
        let err = read_document(&PathBuf::from("/definitely/not/here.yml")).expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
