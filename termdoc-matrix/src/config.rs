use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use serde::{Deserialize, Serialize};

/// Compressed layout produced by [`crate::CountMatrix::to_compressed`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatrixLayout {
    /// one compressed row per document
    #[default]
    Csr,
    /// one compressed column per token
    Csc,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CountMatrixConfig {
    pub layout: MatrixLayout,
}

#[derive(Error, Debug)]
pub enum MatrixConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type MatrixConfigResult<T> = std::result::Result<T, MatrixConfigError>;

impl CountMatrixConfig {
    pub fn new(layout: MatrixLayout) -> Self {
        Self { layout }
    }
}

impl FromStr for CountMatrixConfig {
    type Err = MatrixConfigError;

    fn from_str(s: &str) -> MatrixConfigResult<Self> {
        let config = toml::from_str(s)?;
        Ok(config)
    }
}

impl TryFrom<&Path> for CountMatrixConfig {
    type Error = MatrixConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/matrix/count_matrix.toml");
        let result = CountMatrixConfig::try_from(path.as_path());
        assert_eq!(result.is_ok(), true);
        assert_eq!(result.unwrap().layout, MatrixLayout::Csc);
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/matrix/does_not_exist.toml");
        let result = CountMatrixConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(MatrixConfigError::Io(_))), true);
    }

    #[rstest]
    fn test_bad_layout() {
        let path = PathBuf::from("../tests/data/matrix/count_matrix_bad_layout.toml");
        let result = CountMatrixConfig::try_from(path.as_path());
        assert_eq!(matches!(result, Err(MatrixConfigError::Toml(_))), true);
    }

    #[rstest]
    #[case("", MatrixLayout::Csr)]
    #[case("layout = \"csr\"", MatrixLayout::Csr)]
    #[case("layout = \"csc\"", MatrixLayout::Csc)]
    fn test_parse_layout(#[case] toml_str: &str, #[case] expected: MatrixLayout) {
        let config: CountMatrixConfig = toml_str.parse().unwrap();
        assert_eq!(config.layout, expected);
    }
}
