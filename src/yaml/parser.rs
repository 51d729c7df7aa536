//! YAML parsing with error handling

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse YAML content into a typed value with nice error messages
pub fn parse_yaml<T: DeserializeOwned>(content: &str, filename: &str) -> Result<T, YamlError> {
    serde_yml::from_str(content).map_err(|e| {
        YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename))
    })
}

/// Parse YAML from raw bytes (embedded assets)
pub fn parse_yaml_bytes<T: DeserializeOwned>(bytes: &[u8], filename: &str) -> Result<T, YamlError> {
    let content = std::str::from_utf8(bytes).map_err(|_| YamlError::Encoding {
        file: filename.to_string(),
    })?;
    parse_yaml(content, filename)
}

/// Parse YAML from a file path
pub fn parse_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let filename = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| YamlError::Io {
        path: filename.clone(),
        source,
    })?;
    parse_yaml(&content, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Offset {
        key: String,
        value: f64,
    }

    #[test]
    fn test_parse_valid_yaml() {
        let yaml = "key: CVR_TEST\nvalue: 12.125";
        let result: Offset = parse_yaml(yaml, "offsets.yaml").unwrap();
        assert_eq!(result.key, "CVR_TEST");
        assert_eq!(result.value, 12.125);
    }

    #[test]
    fn test_type_mismatch_reports_line() {
        let yaml = "key: CVR_TEST\nvalue: not-a-number\n";
        let err = parse_yaml::<Offset>(yaml, "offsets.yaml").unwrap_err();
        match err {
            YamlError::Syntax(syntax) => {
                assert_eq!(syntax.file, "offsets.yaml");
                assert!(syntax.line.map_or(true, |line| line == 2));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let result: Result<Offset, _> = parse_yaml_bytes(&[0xff, 0xfe], "bad.yaml");
        assert!(matches!(result, Err(YamlError::Encoding { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Offset, _> = parse_yaml_file(Path::new("/nonexistent/doorkit.yaml"));
        assert!(matches!(result, Err(YamlError::Io { .. })));
    }
}
