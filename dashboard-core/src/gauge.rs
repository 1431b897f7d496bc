//! Temperature gauge specification.
//!
//! Building a gauge is a pure function of two temperatures: the same inputs
//! always produce an equal [`GaugeSpec`]. Drawing it is left to the caller.

/// Fixed display domain of the gauge, in °C.
pub const GAUGE_MIN_C: f64 = -20.0;
pub const GAUGE_MAX_C: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

/// Renderable description of a radial temperature gauge: a fixed domain and
/// color bands, a needle at the current value, and a delta against the
/// reference (feels-like) temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub reference: f64,
    pub delta: f64,
    pub bands: [GaugeBand; 3],
}

const BANDS: [GaugeBand; 3] = [
    GaugeBand { from: GAUGE_MIN_C, to: 0.0, color: "#1E88E5" },
    GaugeBand { from: 0.0, to: 20.0, color: "#FFC107" },
    GaugeBand { from: 20.0, to: GAUGE_MAX_C, color: "#FF5722" },
];

/// Gauge for the current temperature, with the feels-like temperature as the
/// delta reference.
pub fn temperature_gauge(temp_c: f64, feels_like_c: f64) -> GaugeSpec {
    GaugeSpec {
        title: "Temperature (°C)",
        min: GAUGE_MIN_C,
        max: GAUGE_MAX_C,
        value: temp_c,
        reference: feels_like_c,
        delta: temp_c - feels_like_c,
        bands: BANDS,
    }
}

impl GaugeSpec {
    /// Index of the band covering `value`: cold below 0, moderate from 0
    /// through 20, hot above 20. Values outside the domain are clamped.
    pub fn band_index(&self, value: f64) -> usize {
        let v = value.clamp(self.min, self.max);
        if v < self.bands[1].from {
            0
        } else if v <= self.bands[1].to {
            1
        } else {
            2
        }
    }

    /// Fraction of the domain covered at `value`, clamped to `0.0..=1.0`.
    pub fn position(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_yield_equal_specs() {
        let a = temperature_gauge(15.0, 14.2);
        let b = temperature_gauge(15.0, 14.2);
        assert_eq!(a, b);
    }

    #[test]
    fn delta_is_value_minus_reference() {
        let spec = temperature_gauge(15.0, 14.2);
        assert!((spec.delta - 0.8).abs() < 1e-9);

        let spec = temperature_gauge(-3.0, 2.5);
        assert!((spec.delta + 5.5).abs() < 1e-9);
    }

    #[test]
    fn domain_and_bands_are_fixed() {
        let spec = temperature_gauge(30.0, 30.0);
        assert_eq!(spec.min, -20.0);
        assert_eq!(spec.max, 50.0);
        assert_eq!(spec.bands[0].color, "#1E88E5");
        assert_eq!(spec.bands[1].color, "#FFC107");
        assert_eq!(spec.bands[2].color, "#FF5722");
    }

    #[test]
    fn band_boundaries() {
        let spec = temperature_gauge(0.0, 0.0);
        assert_eq!(spec.band_index(-5.0), 0);
        assert_eq!(spec.band_index(0.0), 1);
        assert_eq!(spec.band_index(20.0), 1);
        assert_eq!(spec.band_index(20.1), 2);
    }

    #[test]
    fn out_of_domain_values_clamp_to_edge_bands() {
        let spec = temperature_gauge(0.0, 0.0);
        assert_eq!(spec.band_index(-100.0), 0);
        assert_eq!(spec.band_index(100.0), 2);
    }

    #[test]
    fn position_spans_the_domain() {
        let spec = temperature_gauge(15.0, 15.0);
        assert_eq!(spec.position(-20.0), 0.0);
        assert_eq!(spec.position(50.0), 1.0);
        assert!((spec.position(15.0) - 0.5).abs() < 1e-9);

        assert_eq!(spec.position(-40.0), 0.0);
        assert_eq!(spec.position(90.0), 1.0);
    }
}
