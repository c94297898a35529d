use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    Config,
    error::WeatherError,
    model::{WeatherReading, WeatherRequest},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { api_key, base_url, http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key().to_owned(), config.base_url())
    }

    fn find_url(&self) -> String {
        format!("{}/find", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwFindEntry {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwFindResponse {
    list: Vec<OwFindEntry>,
}

/// Map an HTTP status to the lookup error it stands for, if any.
fn check_status(status: StatusCode) -> Result<(), WeatherError> {
    match status {
        StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized),
        StatusCode::NOT_FOUND => Err(WeatherError::NotFound),
        s if !s.is_success() => Err(WeatherError::Http(s.as_u16())),
        _ => Ok(()),
    }
}

/// Request errors carry the full URL, which includes the API key.
fn redact(err: reqwest::Error) -> WeatherError {
    WeatherError::Request(err.without_url())
}

/// Parse a `/find` response body into the first matching reading.
fn parse_find_body(body: &str) -> Result<WeatherReading, WeatherError> {
    let parsed: OwFindResponse =
        serde_json::from_str(body).map_err(WeatherError::MalformedResponse)?;

    // Unknown cities come back as 200 with an empty list.
    let entry = parsed.list.into_iter().next().ok_or(WeatherError::NotFound)?;

    let weather = entry.weather.into_iter().next().ok_or_else(|| {
        WeatherError::MalformedResponse(serde::de::Error::custom("empty `weather` array"))
    })?;

    Ok(WeatherReading {
        city: entry.name,
        condition_id: weather.id,
        description: weather.description,
        temperature: entry.main.temp,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReading, WeatherError> {
        let url = self.find_url();
        debug!(%url, city = %request.city, units = request.units.as_query(), "requesting weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", request.city.as_str()),
                ("units", request.units.as_query()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(redact)?;

        let status = res.status();
        debug!(%status, "received response");
        check_status(status)?;

        let body = res.text().await.map_err(redact)?;
        parse_find_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIND_BODY: &str = r#"{
        "message": "accurate",
        "cod": "200",
        "count": 1,
        "list": [{
            "id": 2643743,
            "name": "London",
            "main": { "temp": 11.5, "humidity": 80 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }]
        }]
    }"#;

    #[test]
    fn parses_first_entry() {
        let reading = parse_find_body(FIND_BODY).expect("body should parse");

        assert_eq!(reading.city, "London");
        assert_eq!(reading.condition_id, 500);
        assert_eq!(reading.description, "light rain");
        assert_eq!(reading.temperature, 11.5);
    }

    #[test]
    fn empty_list_is_not_found() {
        let err = parse_find_body(r#"{"list": []}"#).unwrap_err();
        assert!(matches!(err, WeatherError::NotFound));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = parse_find_body(r#"{"list": [{"name": "X", "weather": []}]}"#).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));

        let err = parse_find_body(r#"{"list": [{"name": "X", "main": {"temp": 1.0}, "weather": []}]}"#)
            .unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_find_body("<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Couldn't read the server response.");
    }

    #[test]
    fn status_mapping() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(check_status(StatusCode::UNAUTHORIZED), Err(WeatherError::Unauthorized)));
        assert!(matches!(check_status(StatusCode::NOT_FOUND), Err(WeatherError::NotFound)));
        assert!(matches!(
            check_status(StatusCode::TOO_MANY_REQUESTS),
            Err(WeatherError::Http(429))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let provider = OpenWeatherProvider::new("KEY".into(), "http://localhost:1234/");
        assert_eq!(provider.find_url(), "http://localhost:1234/find");

        let provider = OpenWeatherProvider::from_config(&Config::with_api_key("KEY"));
        assert_eq!(provider.find_url(), "https://api.openweathermap.org/data/2.5/find");
    }
}
