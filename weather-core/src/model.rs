/// Unit system requested from the API and shown next to the temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub units: Units,
}

impl WeatherRequest {
    /// Build a request from the city words as typed on the command line.
    pub fn new(words: &[String], units: Units) -> Self {
        let city = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self { city, units }
    }
}

/// A single observation for one city, as returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub condition_id: u16,
    pub description: String,
    pub temperature: f64,
}

impl WeatherReading {
    pub fn condition(&self) -> Condition {
        Condition::from_id(self.condition_id)
    }
}

/// Weather group derived from an OpenWeather condition code.
///
/// See <https://openweathermap.org/weather-conditions#Weather-Condition-Codes-2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    /// Codes outside every documented group, e.g. ones added later by the API.
    Unknown,
}

impl Condition {
    pub fn from_id(id: u16) -> Self {
        match id {
            200..300 => Condition::Thunderstorm,
            300..400 => Condition::Drizzle,
            500..600 => Condition::Rain,
            600..700 => Condition::Snow,
            700..800 => Condition::Atmosphere,
            800 => Condition::Clear,
            801..900 => Condition::Clouds,
            _ => Condition::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_ranges_follow_openweather_groups() {
        assert_eq!(Condition::from_id(200), Condition::Thunderstorm);
        assert_eq!(Condition::from_id(299), Condition::Thunderstorm);
        assert_eq!(Condition::from_id(300), Condition::Drizzle);
        assert_eq!(Condition::from_id(511), Condition::Rain);
        assert_eq!(Condition::from_id(601), Condition::Snow);
        assert_eq!(Condition::from_id(741), Condition::Atmosphere);
        assert_eq!(Condition::from_id(800), Condition::Clear);
        assert_eq!(Condition::from_id(801), Condition::Clouds);
        assert_eq!(Condition::from_id(804), Condition::Clouds);
    }

    #[test]
    fn unknown_codes_fall_back() {
        for id in [0, 199, 400, 450, 499, 900, 950, u16::MAX] {
            assert_eq!(Condition::from_id(id), Condition::Unknown, "code {id}");
        }
    }

    #[test]
    fn request_joins_city_words() {
        let words = vec!["New".to_string(), " York ".to_string(), "".to_string()];
        let req = WeatherRequest::new(&words, Units::Imperial);

        assert_eq!(req.city, "New York");
        assert_eq!(req.units, Units::Imperial);
    }

    #[test]
    fn units_query_and_symbol() {
        assert_eq!(Units::from_imperial_flag(false), Units::Metric);
        assert_eq!(Units::Metric.as_query(), "metric");
        assert_eq!(Units::Imperial.as_query(), "imperial");
        assert_eq!(Units::Metric.symbol(), 'C');
        assert_eq!(Units::Imperial.symbol(), 'F');
    }
}
