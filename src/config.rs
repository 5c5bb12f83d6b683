use super::weather::WeatherSnapshot;

use failure::Fail;
use serde::Deserialize;

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::prelude::*;

pub const DEFAULT_CONFIG_FILE: &str = "WeatherStation.json";

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "can't read config file {}: {}", path, cause)]
    Io {
        path: String,
        #[cause] cause: io::Error,
    },
    #[fail(display = "invalid config file {}: {}", path, cause)]
    Parse {
        path: String,
        #[cause] cause: serde_json::Error,
    },
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io{cause, ..} => cause.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/** Settings read at startup. Missing entries keep their defaults. */
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial: WeatherSnapshot,  // Readings shown at startup
    pub log_spec: String,          // flexi_logger log specification
    pub log_directory: String,
    pub color_scheme: String,      // "light" or "dark"
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig{
            initial: WeatherSnapshot::new("25", "Sunny", "Warm and clear"),
            log_spec: "info".to_string(),
            log_directory: "logs".to_string(),
            color_scheme: "light".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(filename: &str) -> Result<AppConfig, ConfigError> {
        let read = || -> io::Result<String> {
            let file = File::open(filename)?;
            let mut reader = BufReader::new(file);
            let mut serialized = String::new();
            reader.read_to_string(&mut serialized)?;
            Ok(serialized)
        };
        let serialized = read().map_err(|cause| ConfigError::Io{path: filename.to_string(), cause})?;
        serde_json::from_str(&serialized).map_err(|cause| ConfigError::Parse{path: filename.to_string(), cause})
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;
    use std::fs;

    #[test]
    fn test_defaults_show_sample_readings() {
        let config = AppConfig::default();
        assert_eq!(config.initial, WeatherSnapshot::new("25", "Sunny", "Warm and clear"));
        assert_eq!(config.log_spec, "info");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"color_scheme": "dark", "initial": {"forecast": "Snow"}}"#).unwrap();
        assert_eq!(config.color_scheme, "dark");
        assert_eq!(config.initial, WeatherSnapshot::new("", "", "Snow"));
        assert_eq!(config.log_directory, "logs");
    }

    #[test]
    fn test_missing_file_is_reported_as_not_found() {
        let result = AppConfig::load("no/such/dir/WeatherStation.json");
        match result {
            Err(e) => assert!(e.is_not_found()),
            Ok(_) => panic!("Loaded config from missing file"),
        }
    }

    #[test]
    fn test_config_file_is_read() {
        let path = env::temp_dir().join(format!("weather_station_test_{}.json", std::process::id()));
        let filename = path.to_str().unwrap().to_string();
        fs::write(&path, r#"{"log_spec": "trace", "initial": {"temperature": "12", "current_conditions": "Mist", "forecast": "Rain"}}"#).unwrap();

        let config = AppConfig::load(&filename).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.log_spec, "trace");
        assert_eq!(config.initial, WeatherSnapshot::new("12", "Mist", "Rain"));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = env::temp_dir().join(format!("weather_station_bad_{}.json", std::process::id()));
        let filename = path.to_str().unwrap().to_string();
        fs::write(&path, "{ not json").unwrap();

        let result = AppConfig::load(&filename);
        fs::remove_file(&path).ok();

        match result {
            Err(ConfigError::Parse{..}) => {},
            _ => panic!("Expected parse error"),
        }
    }
}
