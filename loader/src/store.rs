use crate::error::{FormatError, LoaderError};
use crate::genre::Genre;
use crate::value::{Map, Value};
use serde::de::DeserializeOwned;

/// In-memory tree of configuration keys.
///
/// Nested keys are addressed as flattened paths joined by the store's
/// delimiter, e.g. `spec.http.route` with the default `"."`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    delim: String,
    root: Map,
}

impl Store {
    pub fn new(delim: impl Into<String>) -> Self {
        Store {
            delim: delim.into(),
            root: Map::new(),
        }
    }

    pub fn delim(&self) -> &str {
        &self.delim
    }

    pub fn raw(&self) -> &Map {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Parses `bytes` as a `genre` document and merges it into the store.
    pub fn load(&mut self, bytes: &[u8], genre: Genre) -> Result<(), LoaderError> {
        let parsed = genre
            .parser()
            .unmarshal(bytes)
            .map_err(|source| LoaderError::Parse { genre, source })?;

        match parsed {
            Value::Map(map) => merge_maps(&mut self.root, map),
            // Empty document
            Value::Null => {}
            _ => {
                return Err(LoaderError::Parse {
                    genre,
                    source: FormatError::RootNotMap,
                });
            }
        }
        Ok(())
    }

    /// Encodes the whole tree as a `genre` document.
    pub fn marshal(&self, genre: Genre) -> Result<Vec<u8>, LoaderError> {
        genre
            .parser()
            .marshal(&Value::Map(self.root.clone()))
            .map_err(|source| LoaderError::Marshal { genre, source })
    }

    /// Decodes the whole tree into `T`.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, LoaderError> {
        let json = serde_json::to_value(&self.root)?;
        Ok(serde_json::from_value(json)?)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = self.split(path).into_iter();
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Sets `value` at `path`, creating intermediate maps as needed. Any
    /// non-map value found along the way is replaced.
    pub fn set(&mut self, path: &str, value: Value) {
        let segments = self.split(path);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.root;
        for segment in parents {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(Map::new()));
            if !matches!(entry, Value::Map(_)) {
                *entry = Value::Map(Map::new());
            }
            let Value::Map(map) = entry else {
                return;
            };
            current = map;
        }
        current.insert(last.to_string(), value);
    }

    /// Returns the flattened paths of every leaf, in document order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, None, &self.delim, &mut keys);
        keys
    }

    /// Returns a new store rooted at the map found at `path`. The result is
    /// empty when the path is missing or does not point at a map.
    pub fn cut(&self, path: &str) -> Store {
        let root = self
            .get(path)
            .and_then(Value::as_map)
            .cloned()
            .unwrap_or_default();
        Store {
            delim: self.delim.clone(),
            root,
        }
    }

    /// Merges `other` into this store. Maps merge recursively, anything
    /// else in `other` overwrites.
    pub fn merge(&mut self, other: Store) {
        merge_maps(&mut self.root, other.root);
    }

    fn split<'a>(&self, path: &'a str) -> Vec<&'a str> {
        if self.delim.is_empty() {
            vec![path]
        } else {
            path.split(self.delim.as_str()).collect()
        }
    }
}

fn merge_maps(dst: &mut Map, src: Map) {
    for (key, value) in src {
        if let Value::Map(incoming) = value {
            if let Some(Value::Map(existing)) = dst.get_mut(&key) {
                merge_maps(existing, incoming);
                continue;
            }
            dst.insert(key, Value::Map(incoming));
        } else {
            dst.insert(key, value);
        }
    }
}

fn collect_keys(map: &Map, prefix: Option<&str>, delim: &str, out: &mut Vec<String>) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{delim}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Map(inner) if !inner.is_empty() => collect_keys(inner, Some(&path), delim, out),
            _ => out.push(path),
        }
    }
}
