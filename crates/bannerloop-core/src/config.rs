use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            banner: BannerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Items shown by the carousel, in order
    #[serde(default = "default_items")]
    pub items: Vec<String>,
    /// Auto-scroll interval in seconds
    #[serde(default = "default_scrolling_time")]
    pub scrolling_time: f64,
    /// Padded index auto-scroll starts from. Never a sentinel position;
    /// out-of-range values are clamped into the real-item range.
    #[serde(default = "default_auto_scroll_index")]
    pub auto_scroll_index: usize,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            scrolling_time: default_scrolling_time(),
            auto_scroll_index: default_auto_scroll_index(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth paging configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Smooth paging animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth page transitions
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Page transition duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Target animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Easing curve applied to page transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

fn default_items() -> Vec<String> {
    vec!["first".into(), "second".into(), "last".into()]
}

fn default_scrolling_time() -> f64 {
    5.0
}

fn default_auto_scroll_index() -> usize {
    1
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
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
    /// Always uses ~/.config/bannerloop/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("bannerloop")
            .join("config.toml")
    }
}
