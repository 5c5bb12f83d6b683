use serde::Deserialize;

/** One complete set of weather readings.
 *
 * The values are free text and are passed on to the displays unchanged. A
 * snapshot is always replaced as a whole, so observers never see a mix of
 * old and new values.
 */
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherSnapshot {
    pub temperature: String,
    pub current_conditions: String,
    pub forecast: String,
}

impl WeatherSnapshot {
    pub fn new(temperature: &str, current_conditions: &str, forecast: &str) -> WeatherSnapshot {
        WeatherSnapshot{
            temperature: temperature.to_string(),
            current_conditions: current_conditions.to_string(),
            forecast: forecast.to_string(),
        }
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------

#[cfg(test)]
mod tests {
    use super::WeatherSnapshot;

    #[test]
    fn test_default_snapshot_is_empty() {
        let s = WeatherSnapshot::default();
        assert_eq!(s.temperature, "");
        assert_eq!(s.current_conditions, "");
        assert_eq!(s.forecast, "");
    }

    #[test]
    fn test_missing_fields_are_read_as_empty() {
        let s: WeatherSnapshot = serde_json::from_str(r#"{"temperature": "-3"}"#).unwrap();
        assert_eq!(s, WeatherSnapshot::new("-3", "", ""));
    }
}
