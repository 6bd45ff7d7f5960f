use crate::genre::Genre;
use std::io;
use std::path::PathBuf;

/// Errors raised by a single encoding or decoding step.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("toml error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("document is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("document root must be a map")]
    RootNotMap,
}

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("no path given for configuration source")]
    MissingPath,
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported {0} file type")]
    UnsupportedGenre(String),
    #[error("could not parse {genre} document: {source}")]
    Parse {
        genre: Genre,
        #[source]
        source: FormatError,
    },
    #[error("could not marshal configuration as {genre}: {source}")]
    Marshal {
        genre: Genre,
        #[source]
        source: FormatError,
    },
    #[error("could not decode configuration: {0}")]
    Decode(#[from] serde_json::Error),
}
