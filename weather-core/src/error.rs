use thiserror::Error;

/// Failures of a single weather lookup.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Access denied. Check your API key.")]
    Unauthorized,

    #[error("Can't find weather data for this city.")]
    NotFound,

    #[error("Something went wrong... ({0})")]
    Http(u16),

    #[error("Couldn't read the server response.")]
    MalformedResponse(#[source] serde_json::Error),

    /// Built without the request URL, which carries the API key.
    #[error("Failed to reach the weather service.")]
    Request(#[source] reqwest::Error),
}
