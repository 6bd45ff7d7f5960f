use loader::{Genre, LoaderConf, LoaderError};
use router_config::config::RouterConfig;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, PartialEq)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is not set, e.g. `info`
    pub level: Option<String>,
    pub sentry_dsn: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub logging: Option<LoggingConfig>,
    pub metrics: Option<MetricsConfig>,
    pub router: Option<RouterConfig>,
}

impl Config {
    /// Loads the application config. The format follows the file extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let genre = Genre::from_path(path)?;
        let store = LoaderConf::new()
            .with_path(path)
            .with_genre(genre.as_str())
            .load()?;

        let config = store.unmarshal().map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] LoaderError),
    #[error("could not parse config: {0}")]
    ParseError(#[source] LoaderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp_file(s: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        write!(tmp, "{}", s).expect("write config");

        tmp
    }

    #[test]
    fn router_config_yaml() {
        let yaml = r#"
            logging:
                level: debug
            router:
                virtual_service:
                    path: /etc/router/vs.yaml
                destination_rule:
                    path: /etc/router/dr.json
                    genre: json
            "#;
        let tmp = write_tmp_file(yaml, ".yaml");
        let config = Config::from_file(tmp.path()).expect("load config");
        assert_eq!(
            config.logging,
            Some(LoggingConfig {
                level: Some("debug".into()),
                sentry_dsn: None,
            })
        );
        assert!(config.metrics.is_none());

        let router = config.router.expect("router config");
        assert_eq!(router.virtual_service.path, "/etc/router/vs.yaml");
        assert_eq!(router.virtual_service.genre, "");
        assert_eq!(router.destination_rule.genre, "json");
    }

    #[test]
    fn router_config_toml() {
        let toml = r#"
[metrics]
statsd_host = "127.0.0.1"
statsd_port = 8125

[router.virtual_service]
path = "vs.toml"
genre = "toml"
delim = "/"
"#;
        let tmp = write_tmp_file(toml, ".toml");
        let config = Config::from_file(tmp.path()).expect("load config");
        assert_eq!(
            config.metrics,
            Some(MetricsConfig {
                statsd_host: "127.0.0.1".into(),
                statsd_port: 8125,
            })
        );
        let router = config.router.expect("router config");
        assert_eq!(router.virtual_service.delim, "/");
        assert!(router.destination_rule.is_absent());
    }

    #[test]
    fn no_router_section() {
        let tmp = write_tmp_file(r#"{"logging": {"level": "warn"}}"#, ".json");
        let config = Config::from_file(tmp.path()).expect("load config");
        assert!(config.router.is_none());
    }

    #[test]
    fn null_router_section_is_absent() {
        let tmp = write_tmp_file("logging:\n    level: info\nrouter:\n", ".yaml");
        let config = Config::from_file(tmp.path()).expect("load config");
        assert!(config.router.is_none());
    }

    #[test]
    fn router_section_must_be_a_map() {
        let tmp = write_tmp_file("router: 5\n", ".yaml");
        assert!(matches!(
            Config::from_file(tmp.path()),
            Err(ConfigError::ParseError(LoaderError::Decode(_)))
        ));
    }

    #[test]
    fn config_errors() {
        let tmp = write_tmp_file("router: {}\n", ".ini");
        assert!(matches!(
            Config::from_file(tmp.path()),
            Err(ConfigError::LoadError(LoaderError::UnsupportedGenre(g))) if g == "ini"
        ));

        let tmp = write_tmp_file("metrics:\n    statsd_port: 8125\n", ".yml");
        assert!(matches!(
            Config::from_file(tmp.path()),
            Err(ConfigError::ParseError(LoaderError::Decode(_)))
        ));

        let tmp = write_tmp_file("router:\n    virtual_service: [a]\n", ".yml");
        assert!(matches!(
            Config::from_file(tmp.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
