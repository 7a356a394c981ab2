use crate::alert::AlertLevel;
use crate::layers::{LayerId, LayerVisibility};

pub const ALERT_RESET_MS: f64 = 5_000.0; // simulated alert falls back to normal
pub const SIMULATED_FLAG_MS: f64 = 3_000.0; // transient emphasis window
pub const DEFAULT_LAYERS: [LayerId; 2] = [LayerId::Inundacao, LayerId::Infraestrutura];

pub const DEFAULT_PRECIPITATION_THRESHOLD_MM: u32 = 50;
pub const DEFAULT_SOIL_MOISTURE_THRESHOLD_PCT: u32 = 85;

/// Lookup keys accepted by [`DashboardConfig::from_lookup`].
pub const KEY_ALERT_RESET_MS: &str = "alert_reset_ms";
pub const KEY_SIMULATED_FLAG_MS: &str = "simulated_flag_ms";
pub const KEY_ALERT_LEVEL: &str = "alert_level";
pub const KEY_LAYERS: &str = "layers";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertTimings {
    pub reset_after_ms: f64,
    pub flag_window_ms: f64,
}

impl Default for AlertTimings {
    fn default() -> Self {
        Self {
            reset_after_ms: ALERT_RESET_MS,
            flag_window_ms: SIMULATED_FLAG_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub timings: AlertTimings,
    pub initial_alert_level: AlertLevel,
    pub initial_layers: LayerVisibility,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timings: AlertTimings::default(),
            initial_alert_level: AlertLevel::Normal,
            initial_layers: LayerVisibility::with_layers(DEFAULT_LAYERS),
        }
    }
}

impl DashboardConfig {
    /// Build a config from a key/value source (query string, env, ...).
    /// Missing or malformed values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timings = AlertTimings {
            reset_after_ms: positive_ms(&lookup, KEY_ALERT_RESET_MS)
                .unwrap_or(defaults.timings.reset_after_ms),
            flag_window_ms: positive_ms(&lookup, KEY_SIMULATED_FLAG_MS)
                .unwrap_or(defaults.timings.flag_window_ms),
        };
        let initial_alert_level = lookup(KEY_ALERT_LEVEL)
            .and_then(|value| AlertLevel::from_name(value.trim()))
            .unwrap_or(defaults.initial_alert_level);
        let initial_layers = lookup(KEY_LAYERS)
            .map(|value| {
                LayerVisibility::with_layers(
                    value
                        .split(',')
                        .filter_map(|name| LayerId::from_name(name.trim())),
                )
            })
            .unwrap_or(defaults.initial_layers);

        Self {
            timings,
            initial_alert_level,
            initial_layers,
        }
    }
}

fn positive_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    lookup(key)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ALERT_RESET_MS, DashboardConfig, SIMULATED_FLAG_MS};
    use crate::alert::AlertLevel;
    use crate::layers::LayerId;

    fn config_from(pairs: &[(&str, &str)]) -> DashboardConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_source_yields_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.timings.reset_after_ms, ALERT_RESET_MS);
        assert_eq!(config.timings.flag_window_ms, SIMULATED_FLAG_MS);
        assert!(config.initial_layers.is_visible(LayerId::Inundacao));
        assert!(config.initial_layers.is_visible(LayerId::Infraestrutura));
        assert_eq!(config.initial_layers.len(), 2);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("alert_reset_ms", "8000"),
            ("simulated_flag_ms", " 1500 "),
            ("alert_level", "attention"),
            ("layers", "topografia, deformacao"),
        ]);
        assert_eq!(config.timings.reset_after_ms, 8_000.0);
        assert_eq!(config.timings.flag_window_ms, 1_500.0);
        assert_eq!(config.initial_alert_level, AlertLevel::Attention);
        let layers: Vec<_> = config.initial_layers.iter().collect();
        assert_eq!(layers, vec![LayerId::Topografia, LayerId::Deformacao]);
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config_from(&[
            ("alert_reset_ms", "-3"),
            ("simulated_flag_ms", "soon"),
            ("alert_level", "panic"),
        ]);
        assert_eq!(config.timings.reset_after_ms, ALERT_RESET_MS);
        assert_eq!(config.timings.flag_window_ms, SIMULATED_FLAG_MS);
        assert_eq!(config.initial_alert_level, AlertLevel::Normal);
    }

    #[test]
    fn unknown_layer_names_are_skipped() {
        let config = config_from(&[("layers", "hidrografia,radar,")]);
        let layers: Vec<_> = config.initial_layers.iter().collect();
        assert_eq!(layers, vec![LayerId::Hidrografia]);
    }
}
