use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::easing::Easing;
use crate::motion::marquee::MarqueeDirection;
use crate::motion::reveal::RevealDirection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animations are running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Capture mouse events (custom cursor, magnetic toggle, hover)
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            mouse_capture: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (mode name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Starting mode: "light" or "dark"
    pub name: String,
    /// Optional color overrides applied to both palettes
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (\"light\"/\"dark\") or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Raised background (about band, cards)
    pub bg1: Option<String>,
    /// Selection/highlight background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Muted/dim foreground
    pub muted: Option<String>,
    /// Accent color (gradient head)
    pub accent: Option<String>,
    /// Warm accent (gradient tail)
    pub accent_warm: Option<String>,
    /// Selection background
    pub selection: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Collapse all animation durations to zero
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub reveal: RevealTuning,
    #[serde(default)]
    pub marquee: MarqueeTuning,
    #[serde(default)]
    pub magnet: MagnetTuning,
    #[serde(default)]
    pub scroll: ScrollTuning,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            reveal: RevealTuning::default(),
            marquee: MarqueeTuning::default(),
            magnet: MagnetTuning::default(),
            scroll: ScrollTuning::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealTuning {
    /// Reveal only the first time an element enters the viewport
    #[serde(default = "default_true")]
    pub once: bool,
    /// Rows the trigger region is inset from the viewport edges
    #[serde(default = "default_reveal_margin")]
    pub margin_rows: u16,
    /// Reveal duration in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Default travel direction
    #[serde(default = "default_reveal_direction")]
    pub direction: RevealDirection,
    /// Per-glyph stagger for headline reveals, in milliseconds
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
}

impl Default for RevealTuning {
    fn default() -> Self {
        Self {
            once: default_true(),
            margin_rows: default_reveal_margin(),
            duration_ms: default_reveal_duration(),
            direction: default_reveal_direction(),
            stagger_ms: default_stagger(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeTuning {
    /// Base speed in percent of the strip per second
    #[serde(default = "default_marquee_speed")]
    pub speed: f64,
    /// Travel direction
    #[serde(default = "default_marquee_direction")]
    pub direction: MarqueeDirection,
    /// Freeze while the pointer is over the strip
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
}

impl Default for MarqueeTuning {
    fn default() -> Self {
        Self {
            speed: default_marquee_speed(),
            direction: default_marquee_direction(),
            pause_on_hover: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagnetTuning {
    /// Maximum displacement in cells at the element's edge
    #[serde(default = "default_magnet_strength")]
    pub strength: f64,
    #[serde(default = "default_magnet_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_magnet_damping")]
    pub damping: f64,
    #[serde(default = "default_magnet_mass")]
    pub mass: f64,
}

impl Default for MagnetTuning {
    fn default() -> Self {
        Self {
            strength: default_magnet_strength(),
            stiffness: default_magnet_stiffness(),
            damping: default_magnet_damping(),
            mass: default_magnet_mass(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Animate page scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve for scroll animations
    #[serde(default = "default_scroll_easing")]
    pub easing: Easing,
    /// Rows moved per wheel/key step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_scroll_easing(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "light".to_string()
}

fn default_reveal_margin() -> u16 {
    4
}

fn default_reveal_duration() -> u64 {
    500
}

fn default_reveal_direction() -> RevealDirection {
    RevealDirection::Up
}

fn default_stagger() -> u64 {
    30
}

fn default_marquee_speed() -> f64 {
    8.0
}

fn default_marquee_direction() -> MarqueeDirection {
    MarqueeDirection::Left
}

fn default_magnet_strength() -> f64 {
    2.5
}

fn default_magnet_stiffness() -> f64 {
    350.0
}

fn default_magnet_damping() -> f64 {
    15.0
}

fn default_magnet_mass() -> f64 {
    0.1
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_easing() -> Easing {
    Easing::Cubic
}

fn default_scroll_lines() -> u16 {
    2
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

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the optional user work-list path (~/.config/folio/work.toml)
    pub fn work_path() -> PathBuf {
        Self::config_dir().join("work.toml")
    }

    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation_fps, 60);
        assert_eq!(config.ui.theme.name, "light");
        assert!(config.motion.scroll.smooth_enabled);
        assert_eq!(config.motion.reveal.stagger_ms, 30);
        assert!(!config.motion.reduced_motion);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dark");
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dark"
            colors = { accent = "#FF5470" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#FF5470"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion.marquee]
            speed = 12.0
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.marquee.speed, 12.0);
        assert!(config.motion.marquee.pause_on_hover);
        assert_eq!(config.motion.reveal.duration_ms, 500);
    }
}
