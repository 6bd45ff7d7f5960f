//! Format-agnostic configuration loading.
//!
//! A source document is read according to its declared genre (yaml, yml,
//! json or toml) into a [`Store`], a tree of keys addressable through
//! delimited paths, and can be marshaled back into bytes of any supported
//! genre.

pub mod conf;
pub mod error;
pub mod genre;
pub mod parsers;
pub mod store;
pub mod value;

pub use conf::LoaderConf;
pub use error::{FormatError, LoaderError};
pub use genre::Genre;
pub use store::Store;
pub use value::Value;

pub const DEFAULT_GENRE: &str = "yaml";
pub const DEFAULT_DELIM: &str = ".";
