use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How results are shown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Round results to this many decimal places. Unset means the shortest
    /// round-trip representation.
    #[serde(default)]
    pub precision: Option<u32>,
}

/// Event-loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    250
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.display.precision, None);
        assert_eq!(config.ui.tick_ms, 250);
    }

    #[test]
    fn empty_toml_deserializes_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.display.precision, None);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[display]\nprecision = 6\n").unwrap();
        assert_eq!(config.display.precision, Some(6));
        assert_eq!(config.ui.tick_ms, 250);
    }
}
