use crate::error::LoaderError;
use crate::genre::Genre;
use crate::store::Store;
use crate::{DEFAULT_DELIM, DEFAULT_GENRE};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Describes where a configuration source is read from and how.
///
/// Built with the `with_*` options; fields left unset keep the defaults
/// (`yaml` genre, `.` delimiter). Nothing is validated until [`LoaderConf::load`].
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderConf {
    path: PathBuf,
    genre: String,
    delim: String,
    bytes: Option<Vec<u8>>,
}

impl Default for LoaderConf {
    fn default() -> Self {
        LoaderConf {
            path: PathBuf::new(),
            genre: DEFAULT_GENRE.into(),
            delim: DEFAULT_DELIM.into(),
            bytes: None,
        }
    }
}

impl LoaderConf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = delim.into();
        self
    }

    /// Reads the document from `bytes` instead of the filesystem. The path,
    /// if any, is then only used in diagnostics.
    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = Some(bytes.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn delim(&self) -> &str {
        &self.delim
    }

    /// Reads and parses the source into a fresh [`Store`].
    ///
    /// The declared genre selects the parser; the file extension is not
    /// consulted.
    pub fn load(&self) -> Result<Store, LoaderError> {
        let genre: Genre = self.genre.parse()?;
        let bytes = self.read_bytes()?;

        tracing::debug!(
            path = ?self.path,
            genre = %genre,
            bytes = bytes.len(),
            "Loading configuration source"
        );

        let mut store = Store::new(self.delim.as_str());
        store.load(&bytes, genre)?;
        Ok(store)
    }

    fn read_bytes(&self) -> Result<Cow<'_, [u8]>, LoaderError> {
        if let Some(bytes) = &self.bytes {
            return Ok(Cow::Borrowed(bytes.as_slice()));
        }
        if self.path.as_os_str().is_empty() {
            return Err(LoaderError::MissingPath);
        }
        let bytes = fs::read(&self.path).map_err(|source| LoaderError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Cow::Owned(bytes))
    }
}
