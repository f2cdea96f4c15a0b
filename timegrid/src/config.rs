use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub range: RangeSettings,
}

/// How wide the visible grid is, and how much further back raw entries are
/// requested so budget cycles starting before the window still sum their
/// real hours.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RangeSettings {
    pub lookback_days: u32,
    pub overfetch_days: u32,
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            overfetch_days: 30,
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let defaults = RangeSettings::default();

    let settings = config::Config::builder()
        .set_default("range.lookback_days", i64::from(defaults.lookback_days))?
        .set_default("range.overfetch_days", i64::from(defaults.overfetch_days))?
        .add_source(
            config::Environment::with_prefix("TIMEGRID")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
