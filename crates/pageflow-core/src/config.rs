use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            motion: MotionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Tuning for the scroll intensity classifier and transition timing.
///
/// The defaults reproduce the reference behavior: a scroll burst is
/// time-fast below a 150 ms mean interval, magnitude-high above 50, and a
/// streak of more than three fast events escalates transitions to the
/// ultra-fast 400 ms tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Mean inter-event interval below which a burst counts as fast (ms)
    #[serde(default = "default_fast_interval")]
    pub fast_interval_ms: u64,
    /// Mean magnitude above which a burst counts as fast
    #[serde(default = "default_high_magnitude")]
    pub high_magnitude: f64,
    /// Scroll history capacity
    #[serde(default = "default_history_len")]
    pub history_len: usize,
    /// Quiet period after which the fast streak and history reset (ms)
    #[serde(default = "default_idle_reset")]
    pub idle_reset_ms: u64,
    /// Normal transition duration (ms)
    #[serde(default = "default_normal_ms")]
    pub normal_ms: u64,
    /// Fast transition duration (ms)
    #[serde(default = "default_fast_ms")]
    pub fast_ms: u64,
    /// Ultra-fast transition duration (ms)
    #[serde(default = "default_ultra_fast_ms")]
    pub ultra_fast_ms: u64,
    /// Delay before the active indicator swaps to the target section (ms)
    #[serde(default = "default_prepare_delay")]
    pub prepare_delay_ms: u64,
    /// Minimum drag distance for a swipe, in terminal rows
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_rows: f64,
    /// Maximum press-to-release time for a swipe (ms)
    #[serde(default = "default_swipe_window")]
    pub swipe_window_ms: u64,
    /// Magnitude contributed by a single wheel event
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            fast_interval_ms: default_fast_interval(),
            high_magnitude: default_high_magnitude(),
            history_len: default_history_len(),
            idle_reset_ms: default_idle_reset(),
            normal_ms: default_normal_ms(),
            fast_ms: default_fast_ms(),
            ultra_fast_ms: default_ultra_fast_ms(),
            prepare_delay_ms: default_prepare_delay(),
            swipe_threshold_rows: default_swipe_threshold(),
            swipe_window_ms: default_swipe_window(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl MotionConfig {
    #[inline]
    pub fn idle_reset(&self) -> Duration {
        Duration::from_millis(self.idle_reset_ms)
    }

    #[inline]
    pub fn prepare_delay(&self) -> Duration {
        Duration::from_millis(self.prepare_delay_ms)
    }

    #[inline]
    pub fn swipe_window(&self) -> Duration {
        Duration::from_millis(self.swipe_window_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the navigation dot rail
    #[serde(default = "default_true")]
    pub show_dots: bool,
    /// Show the scroll hint
    #[serde(default = "default_true")]
    pub show_hint: bool,
    /// Dim the hint after this long without interaction (ms)
    #[serde(default = "default_hint_dim")]
    pub hint_dim_ms: u64,
    /// Background effect: "drift" or "off"
    #[serde(default = "default_effects")]
    pub effects: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_dots: default_true(),
            show_hint: default_true(),
            hint_dim_ms: default_hint_dim(),
            effects: default_effects(),
        }
    }
}

impl UiConfig {
    #[inline]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[inline]
    pub fn hint_dim_after(&self) -> Duration {
        Duration::from_millis(self.hint_dim_ms)
    }

    #[inline]
    pub fn effects_enabled(&self) -> bool {
        self.effects != "off"
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fast_interval() -> u64 {
    150
}

fn default_high_magnitude() -> f64 {
    50.0
}

fn default_history_len() -> usize {
    5
}

fn default_idle_reset() -> u64 {
    800
}

fn default_normal_ms() -> u64 {
    1200
}

fn default_fast_ms() -> u64 {
    700
}

fn default_ultra_fast_ms() -> u64 {
    400
}

fn default_prepare_delay() -> u64 {
    30
}

fn default_swipe_threshold() -> f64 {
    3.0
}

fn default_swipe_window() -> u64 {
    300
}

fn default_wheel_step() -> f64 {
    30.0
}

fn default_tick_rate() -> u64 {
    33
}

fn default_hint_dim() -> u64 {
    8000
}

fn default_effects() -> String {
    "drift".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pageflow/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pageflow")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.motion.fast_interval_ms, 150);
        assert_eq!(config.motion.high_magnitude, 50.0);
        assert_eq!(config.motion.history_len, 5);
        assert_eq!(config.motion.idle_reset_ms, 800);
        assert_eq!(config.motion.normal_ms, 1200);
        assert_eq!(config.motion.fast_ms, 700);
        assert_eq!(config.motion.ultra_fast_ms, 400);
        assert_eq!(config.ui.tick_rate_ms, 33);
        assert!(config.ui.show_dots);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            normal_ms = 900
            "#,
        )
        .expect("valid config");
        assert_eq!(config.motion.normal_ms, 900);
        assert_eq!(config.motion.fast_ms, 700);
        assert_eq!(config.ui.tick_rate_ms, 33);
    }

    #[test]
    fn test_effects_enabled() {
        let mut config = UiConfig::default();
        assert!(config.effects_enabled());

        config.effects = "off".to_string();
        assert!(!config.effects_enabled());
    }
}
