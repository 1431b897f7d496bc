//! Text rendering for readings, the temperature gauge and the detail panel.
//!
//! Everything here is a pure string builder so the output can be asserted on
//! directly; printing is left to the caller.

use chrono::{DateTime, Local};
use dashboard_core::WeatherReading;
use dashboard_core::gauge::{GaugeSpec, temperature_gauge};

/// Columns used for the gauge bar.
const GAUGE_WIDTH: usize = 35;

/// Shade per band index: cold, moderate, hot.
const BAND_SHADES: [char; 3] = ['░', '▒', '▓'];

/// The full dashboard for one reading: title, timestamp, metrics, condition
/// line and gauge. The detail panel is rendered separately on request.
pub fn render_dashboard(city: &str, reading: &WeatherReading, now: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Weather in {}\n", title_case(city)));
    out.push_str(&format!("Last updated: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&format!(
        "Observed at:  {} UTC\n\n",
        reading.observed_at.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str(&render_metrics(reading));
    out.push_str(&format!(
        "\nCurrent conditions: {}\n\n",
        title_case(&reading.condition)
    ));

    out.push_str(&render_gauge(&temperature_gauge(
        reading.temperature_c,
        reading.feels_like_c,
    )));

    out
}

fn render_metrics(reading: &WeatherReading) -> String {
    format!(
        "Temperature: {:.1}°C (Feels like {:.1}°C)\n\
         Humidity:    {}%\n\
         Wind speed:  {:.1} m/s\n",
        reading.temperature_c,
        reading.feels_like_c,
        reading.humidity_pct,
        reading.wind_speed_mps,
    )
}

/// Draw a gauge spec as a banded bar with a needle marker above it.
pub fn render_gauge(spec: &GaugeSpec) -> String {
    let label = format!("{:.0} ", spec.min);

    let mut bar = String::with_capacity(GAUGE_WIDTH);
    for col in 0..GAUGE_WIDTH {
        // Sample the band at the column's center.
        let frac = (col as f64 + 0.5) / GAUGE_WIDTH as f64;
        let v = spec.min + frac * (spec.max - spec.min);
        bar.push(BAND_SHADES[spec.band_index(v)]);
    }

    let needle = needle_column(spec);
    let marker = format!("{}▼", " ".repeat(label.chars().count() + needle));

    format!(
        "{}: {:.1} ({:+.1} vs feels like)\n{marker}\n{label}{bar} {:.0}\n",
        spec.title, spec.value, spec.delta, spec.max,
    )
}

/// Column of the needle within the bar, for the (clamped) current value.
fn needle_column(spec: &GaugeSpec) -> usize {
    let pos = spec.position(spec.value);
    (pos * (GAUGE_WIDTH - 1) as f64).round() as usize
}

/// The collapsible secondary panel. Rainfall appears only when the reading
/// carried a rain field; missing visibility renders as "N/A".
pub fn render_details(reading: &WeatherReading) -> String {
    let mut out = String::new();

    out.push_str("More details\n");
    out.push_str(&format!("  Pressure:   {} hPa\n", reading.pressure_hpa));
    match reading.visibility_m {
        Some(meters) => out.push_str(&format!("  Visibility: {meters} meters\n")),
        None => out.push_str("  Visibility: N/A\n"),
    }
    out.push_str(&format!("  Cloudiness: {}%\n", reading.cloudiness_pct));
    if let Some(mm) = reading.rain_1h_mm {
        out.push_str(&format!("  Rain (1h):  {mm} mm\n"));
    }

    out
}

/// Capitalize each whitespace-separated word, e.g. "clear sky" → "Clear Sky".
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
