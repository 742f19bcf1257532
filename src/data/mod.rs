//! Core data models for City Weather
//!
//! This module contains the types shared between the weather client, the
//! session history and the UI: the current conditions for a city and the
//! snapshot kept for each successful search.

pub mod weather;

pub use weather::{parse_current_response, FetchError, TransportError, WeatherClient};

/// Current conditions for a resolved location, as returned by a successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Location name as resolved by the API (e.g. "London")
    pub name: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Human readable condition text (e.g. "Partly cloudy")
    pub condition: String,
}

impl CurrentWeather {
    /// "City: London"
    pub fn city_line(&self) -> String {
        format!("City: {}", self.name)
    }

    /// "Temperature: 15°C"
    pub fn temperature_line(&self) -> String {
        format!("Temperature: {}", format_temperature(self.temperature))
    }

    /// "Condition: Cloudy"
    pub fn condition_line(&self) -> String {
        format!("Condition: {}", self.condition)
    }

    /// All three result lines joined on one line, used for logging and tests
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {}",
            self.city_line(),
            self.temperature_line(),
            self.condition_line()
        )
    }

    /// Builds the history snapshot for this result
    pub fn to_record(&self) -> SearchRecord {
        SearchRecord {
            name: self.name.clone(),
            temperature: self.temperature,
            condition: self.condition.clone(),
        }
    }
}

/// Snapshot of one successful search, kept in the session history
///
/// Records are never edited after creation; they only leave the history
/// through an explicit delete or clear.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord {
    /// City name, used as the query when the record is resubmitted
    pub name: String,
    /// Temperature in Celsius at the time of the search
    pub temperature: f64,
    /// Condition text at the time of the search
    pub condition: String,
}

/// Formats a Celsius value the way the result panel shows it.
///
/// Whole numbers drop the fractional part, so `15.0` renders as `15°C`.
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> CurrentWeather {
        CurrentWeather {
            name: "London".to_string(),
            temperature: 15.0,
            condition: "Cloudy".to_string(),
        }
    }

    #[test]
    fn test_format_temperature_whole_number() {
        assert_eq!(format_temperature(15.0), "15°C");
    }

    #[test]
    fn test_format_temperature_fraction() {
        assert_eq!(format_temperature(-3.5), "-3.5°C");
    }

    #[test]
    fn test_result_lines() {
        let weather = london();
        assert_eq!(weather.city_line(), "City: London");
        assert_eq!(weather.temperature_line(), "Temperature: 15°C");
        assert_eq!(weather.condition_line(), "Condition: Cloudy");
    }

    #[test]
    fn test_summary_joins_lines() {
        assert_eq!(
            london().summary(),
            "City: London, Temperature: 15°C, Condition: Cloudy"
        );
    }

    #[test]
    fn test_to_record_copies_fields() {
        let record = london().to_record();
        assert_eq!(
            record,
            SearchRecord {
                name: "London".to_string(),
                temperature: 15.0,
                condition: "Cloudy".to_string(),
            }
        );
    }
}
