//! Human-friendly output formatting for the board.

use cityboard_core::{Board, CityWeather};

/// Shown when the board has no cards yet.
pub const EMPTY_BOARD_MSG: &str = "Search for a city to see its current weather.";

/// Glyph for a WeatherAPI condition code. Keyed by the service's stable
/// numeric code, not by the localized condition text.
pub fn condition_glyph(code: i32) -> &'static str {
    match code {
        1000 => "\u{2600}\u{fe0f}",                  // clear / sunny
        1003 => "\u{26c5}",                          // partly cloudy
        1006 | 1009 => "\u{2601}\u{fe0f}",           // cloudy / overcast
        1030 | 1135 | 1147 => "\u{1f32b}\u{fe0f}",   // mist / fog
        1063 | 1150..=1201 | 1240..=1246 => "\u{1f327}\u{fe0f}", // drizzle / rain
        1066 | 1069 | 1072 | 1114 | 1117 | 1204..=1237 | 1249..=1264 => "\u{2744}\u{fe0f}", // snow / sleet
        1087 | 1273..=1282 => "\u{26c8}\u{fe0f}",    // thunder
        _ => "\u{1f321}\u{fe0f}",                    // fallback thermometer
    }
}

/// One card, multi-line, trailing newline included.
pub fn card(city: &CityWeather) -> String {
    let current = &city.current;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}, {}\n",
        condition_glyph(current.condition.code),
        city.location.name,
        city.location.country,
    ));
    out.push_str(&format!(
        "   {:.1}\u{b0}C  {}\n",
        current.temp_c, current.condition.text,
    ));
    out.push_str(&format!(
        "   Humidity: {}%  Wind: {:.1} km/h\n",
        current.humidity, current.wind_kph,
    ));
    if let Some(feels) = current.feelslike_c {
        out.push_str(&format!("   Feels like: {feels:.1}\u{b0}C\n"));
    }
    if let Some(uv) = current.uv {
        out.push_str(&format!("   UV index: {uv:.1}\n"));
    }
    out.push_str(&format!("   Icon: {}\n", current.condition.icon_url()));

    out
}

/// The whole board: error line first, then cards or the empty placeholder.
pub fn board(board: &Board) -> String {
    let mut out = String::new();

    if let Some(error) = board.error() {
        out.push_str(&format!("! {error}\n"));
    }

    if board.is_empty() {
        out.push_str(EMPTY_BOARD_MSG);
        out.push('\n');
    } else {
        for entry in board.entries() {
            out.push_str(&card(entry));
        }
    }

    out
}
