//! Terminal formatting for a single weather reading.

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};
use weather_core::{Condition, Units, WeatherReading};

/// Column width used to center the city and the description.
pub const PADDING: usize = 20;

/// Glyph and color shown for a condition group.
pub fn display_params(condition: Condition) -> (&'static str, ColorSpec) {
    let mut spec = ColorSpec::new();
    let glyph = match condition {
        Condition::Thunderstorm => {
            spec.set_fg(Some(Color::Red)).set_bold(true);
            "💥"
        }
        Condition::Drizzle => {
            spec.set_fg(Some(Color::Cyan)).set_bold(true);
            "💧"
        }
        Condition::Rain => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            "💦"
        }
        Condition::Snow => {
            spec.set_fg(Some(Color::White));
            "⛄️"
        }
        Condition::Atmosphere => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            "🌀"
        }
        Condition::Clear => {
            spec.set_fg(Some(Color::Yellow));
            "🔆"
        }
        Condition::Clouds => {
            spec.set_fg(Some(Color::White));
            "💨"
        }
        Condition::Unknown => "🌈",
    };

    (glyph, spec)
}

/// Highlight used for the city column.
fn header_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Black)).set_bg(Some(Color::White));
    spec
}

/// Write one line: city, glyph, description and temperature.
pub fn write_reading<W: WriteColor>(
    out: &mut W,
    reading: &WeatherReading,
    units: Units,
) -> io::Result<()> {
    out.set_color(&header_spec())?;
    write!(out, "{:^width$}", reading.city, width = PADDING)?;
    out.reset()?;

    let (glyph, color) = display_params(reading.condition());

    out.set_color(&color)?;
    write!(out, "\t{glyph} ")?;
    write!(out, "\t{:^width$} ", capitalize(&reading.description), width = PADDING)?;
    out.reset()?;

    writeln!(out, "({}°{})", reading.temperature, units.symbol())
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
