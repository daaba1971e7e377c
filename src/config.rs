//! Loading of TOML/JSON files into serde types. The format is picked from the
//! file extension, anything other than `.json` is read as TOML.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse {path} as TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unable to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    debug!(path = %path.display(), "loading file");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        size: usize,
    }

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn loads_toml_by_default() {
        let file = write_temp(".toml", "name = \"maze\"\nsize = 3\n");
        let sample: Sample = load_from_path(file.path()).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "maze".to_string(),
                size: 3
            }
        );
    }

    #[test]
    fn loads_json_by_extension() {
        let file = write_temp(".json", r#"{"name": "maze", "size": 4}"#);
        let sample: Sample = load_from_path(file.path()).unwrap();
        assert_eq!(sample.size, 4);
    }

    #[test]
    fn reports_parse_errors() {
        let file = write_temp(".toml", "name = ");
        let result: Result<Sample, _> = load_from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn reports_missing_files() {
        let result: Result<Sample, _> = load_from_path(Path::new("/does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
