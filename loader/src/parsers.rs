//! Per-genre encoders and decoders for the configuration tree.

use crate::error::FormatError;
use crate::value::Value;

/// Converts between raw document bytes and a [`Value`] tree.
pub trait Parser: Send + Sync {
    fn unmarshal(&self, bytes: &[u8]) -> Result<Value, FormatError>;
    fn marshal(&self, value: &Value) -> Result<Vec<u8>, FormatError>;
}

pub struct YamlParser;

impl Parser for YamlParser {
    fn unmarshal(&self, bytes: &[u8]) -> Result<Value, FormatError> {
        // serde_yaml rejects an empty input slice, treat it as an empty document
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_yaml::from_slice(bytes)?)
    }

    fn marshal(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        Ok(serde_yaml::to_string(value)?.into_bytes())
    }
}

pub struct JsonParser;

impl Parser for JsonParser {
    fn unmarshal(&self, bytes: &[u8]) -> Result<Value, FormatError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn marshal(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec_pretty(value)?)
    }
}

pub struct TomlParser;

impl Parser for TomlParser {
    fn unmarshal(&self, bytes: &[u8]) -> Result<Value, FormatError> {
        let s = std::str::from_utf8(bytes)?;
        Ok(toml::from_str(s)?)
    }

    fn marshal(&self, value: &Value) -> Result<Vec<u8>, FormatError> {
        Ok(toml::to_string(value)?.into_bytes())
    }
}
