use crate::error::LoaderError;
use crate::parsers::{JsonParser, Parser, TomlParser, YamlParser};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Declared textual encoding of a configuration source.
///
/// The set is closed: adding a format means adding a variant here and a
/// parser in [`crate::parsers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Yaml,
    Yml,
    Json,
    Toml,
}

impl Genre {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Genre::Yaml => "yaml",
            Genre::Yml => "yml",
            Genre::Json => "json",
            Genre::Toml => "toml",
        }
    }

    /// Returns the parser used both to load and to marshal this genre.
    pub fn parser(&self) -> &'static dyn Parser {
        match self {
            Genre::Yaml | Genre::Yml => &YamlParser,
            Genre::Json => &JsonParser,
            Genre::Toml => &TomlParser,
        }
    }

    /// Derives the genre from a file extension, e.g. `conf/app.toml`.
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for Genre {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(Genre::Yaml),
            "yml" => Ok(Genre::Yml),
            "json" => Ok(Genre::Json),
            "toml" => Ok(Genre::Toml),
            other => Err(LoaderError::UnsupportedGenre(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Genre {
    type Error = LoaderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
