use loader::{DEFAULT_DELIM, DEFAULT_GENRE, LoaderConf};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("configuration path {0:?} is blank")]
    BlankPath(String),
}

/// Declares one configuration source of the router section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Property {
    /// Location of the source document
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Declared format of the document: `yaml`, `yml`, `json` or `toml`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub genre: String,
    /// Separator used to address nested keys as a flattened path
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delim: String,
}

impl Property {
    pub fn new<P, G>(path: P, genre: G) -> Self
    where
        P: Into<String>,
        G: Into<String>,
    {
        Property {
            path: path.into(),
            genre: genre.into(),
            delim: String::new(),
        }
    }

    /// Applies the default genre and delimiter to empty fields.
    pub fn check(&mut self) -> Result<(), ValidationError> {
        if self.genre.is_empty() {
            self.genre = DEFAULT_GENRE.to_string();
        }
        if self.delim.is_empty() {
            self.delim = DEFAULT_DELIM.to_string();
        }
        if !self.path.is_empty() && self.path.trim().is_empty() {
            return Err(ValidationError::BlankPath(self.path.clone()));
        }
        Ok(())
    }

    /// True when no source document was configured.
    pub fn is_absent(&self) -> bool {
        self.path.is_empty()
    }

    pub fn loader_conf(&self) -> LoaderConf {
        LoaderConf::new()
            .with_path(&self.path)
            .with_genre(&self.genre)
            .with_delim(&self.delim)
    }
}

/// The `router` section of the application configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    pub virtual_service: Property,
    pub destination_rule: Property,
}

impl RouterConfig {
    /// Key of this section in the application configuration.
    pub const PREFIX: &'static str = "router";

    pub fn check(&mut self) -> Result<(), ValidationError> {
        self.virtual_service.check()?;
        self.destination_rule.check()?;
        Ok(())
    }
}
