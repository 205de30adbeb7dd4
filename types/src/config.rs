//! Timing configuration for every animated section.
//!
//! All cadence and duration values live here instead of being repeated as
//! literals across sections. Every struct is `#[serde(default)]`, so a TOML
//! file only needs the keys it overrides:
//!
//! ```toml
//! [reveal]
//! threshold = 0.5
//!
//! [hero]
//! interval_ms = 4000
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effect::{BattleCharacter, FigureSize, Intensity, JutsuType, StagePosition};

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Non-fatal problems found by [`FolioConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// Reveal threshold outside `(0, 1]`; the tracker clamps it.
    ThresholdOutOfRange { value: f32 },
    /// A periodic effect with a zero interval never gets an idle gap.
    ZeroInterval { section: &'static str },
    /// Display duration covers the whole period, the effect never turns off.
    DurationCoversInterval {
        section: &'static str,
        duration_ms: u64,
        interval_ms: u64,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThresholdOutOfRange { value } => {
                write!(f, "reveal threshold {} is outside (0, 1]", value)
            }
            Self::ZeroInterval { section } => write!(f, "[{}] interval_ms is zero", section),
            Self::DurationCoversInterval {
                section,
                duration_ms,
                interval_ms,
            } => write!(
                f,
                "[{}] duration_ms {} >= interval_ms {}",
                section, duration_ms, interval_ms
            ),
        }
    }
}

/// What to do with a reveal target whose index attribute is missing or unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedIndexPolicy {
    /// Do not observe the target at all.
    #[default]
    Skip,
    /// Treat it as index 0. Shares reveal state with a real item 0.
    AliasToZero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f32,
    pub malformed_index: MalformedIndexPolicy,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            malformed_index: MalformedIndexPolicy::Skip,
        }
    }
}

impl RevealConfig {
    /// Threshold clamped to `[0, 1]`; NaN falls back to the default.
    pub fn effective_threshold(&self) -> f32 {
        if self.threshold.is_nan() {
            return Self::default().threshold;
        }
        self.threshold.clamp(0.0, 1.0)
    }
}

/// Cadence of a self-driven transient effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicEffectConfig {
    /// Base time between activations.
    pub interval_ms: u64,
    /// Upper bound of the random extra delay added to each period.
    pub jitter_ms: u64,
    /// How long the effect stays active per activation.
    pub duration_ms: u64,
}

impl PeriodicEffectConfig {
    pub const fn new(interval_ms: u64, jitter_ms: u64, duration_ms: u64) -> Self {
        Self {
            interval_ms,
            jitter_ms,
            duration_ms,
        }
    }

    fn check(&self, section: &'static str, warnings: &mut Vec<ConfigWarning>) {
        if self.interval_ms == 0 {
            warnings.push(ConfigWarning::ZeroInterval { section });
        } else if self.duration_ms >= self.interval_ms {
            warnings.push(ConfigWarning::DurationCoversInterval {
                section,
                duration_ms: self.duration_ms,
                interval_ms: self.interval_ms,
            });
        }
    }
}

impl Default for PeriodicEffectConfig {
    fn default() -> Self {
        Self::new(3000, 0, 2000)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub roster: Vec<BattleCharacter>,
    /// Cadence of every character's jutsu flash.
    pub vfx: PeriodicEffectConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        use FigureSize::*;
        use JutsuType::*;
        use StagePosition::*;

        Self {
            roster: vec![
                BattleCharacter::new(Left, Fire, Medium, 500),
                BattleCharacter::new(Left, Shadow, Small, 2000),
                BattleCharacter::new(Right, Lightning, Medium, 1000),
                BattleCharacter::new(Right, Wind, Small, 3000),
                BattleCharacter::new(Center, Water, Large, 1500),
            ],
            vfx: PeriodicEffectConfig::new(5000, 3000, 2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackConfig {
    /// How long the weapon wheel spins after mount.
    pub spin_duration_ms: u64,
    pub lightning: PeriodicEffectConfig,
}

impl Default for TechStackConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 3000,
            lightning: PeriodicEffectConfig::new(8000, 0, 2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// Loading indicator is shown this long.
    pub loading_ms: u64,
    /// Cinematic intro replaces the page this long.
    pub intro_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            loading_ms: 3000,
            intro_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VfxDefaults {
    pub duration_ms: u64,
    pub intensity: Intensity,
}

impl Default for VfxDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            intensity: Intensity::Medium,
        }
    }
}

/// Root configuration passed to every section controller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub reveal: RevealConfig,
    pub hero: PeriodicEffectConfig,
    pub battle: BattleConfig,
    pub tech_stack: TechStackConfig,
    pub intro: IntroConfig,
    pub vfx: VfxDefaults,
}

impl FolioConfig {
    /// Parse a (possibly partial) TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a TOML config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&contents)?;
        for warning in config.validate() {
            tracing::warn!(path = ?path, "{}", warning);
        }
        Ok(config)
    }

    /// Report suspicious values. Never rejects the config.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let t = self.reveal.threshold;
        if t.is_nan() || t <= 0.0 || t > 1.0 {
            warnings.push(ConfigWarning::ThresholdOutOfRange { value: t });
        }

        self.hero.check("hero", &mut warnings);
        self.battle.vfx.check("battle.vfx", &mut warnings);
        self.tech_stack.lightning.check("tech_stack.lightning", &mut warnings);

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_section_timings() {
        let config = FolioConfig::default();
        assert_eq!(config.reveal.threshold, 0.3);
        assert_eq!(config.hero, PeriodicEffectConfig::new(3000, 0, 2000));
        assert_eq!(config.battle.vfx, PeriodicEffectConfig::new(5000, 3000, 2000));
        assert_eq!(config.battle.roster.len(), 5);
        assert_eq!(config.battle.roster[0].entrance_delay_ms, 500);
        assert_eq!(config.tech_stack.spin_duration_ms, 3000);
        assert_eq!(config.tech_stack.lightning.interval_ms, 8000);
        assert_eq!(config.intro.loading_ms, 3000);
        assert_eq!(config.intro.intro_ms, 4000);
        assert_eq!(config.vfx.duration_ms, 3000);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
[reveal]
threshold = 0.5
malformed_index = "alias-to-zero"

[hero]
interval_ms = 4000
"#;
        let config = FolioConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.reveal.threshold, 0.5);
        assert_eq!(config.reveal.malformed_index, MalformedIndexPolicy::AliasToZero);
        assert_eq!(config.hero.interval_ms, 4000);
        assert_eq!(config.hero.duration_ms, 2000);
        assert_eq!(config.intro, IntroConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FolioConfig::from_toml_str("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = FolioConfig::from_toml_str("[hero]\ninterval_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FolioConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let mut config = FolioConfig::default();
        config.reveal.threshold = 1.5;
        config.hero.interval_ms = 0;
        config.tech_stack.lightning.duration_ms = 9000;

        let warnings = config.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.contains(&ConfigWarning::ThresholdOutOfRange { value: 1.5 }));
        assert!(warnings.contains(&ConfigWarning::ZeroInterval { section: "hero" }));
        assert!(warnings.contains(&ConfigWarning::DurationCoversInterval {
            section: "tech_stack.lightning",
            duration_ms: 9000,
            interval_ms: 8000,
        }));
    }

    #[test]
    fn test_effective_threshold_clamps() {
        let mut reveal = RevealConfig::default();
        reveal.threshold = -0.2;
        assert_eq!(reveal.effective_threshold(), 0.0);
        reveal.threshold = 3.0;
        assert_eq!(reveal.effective_threshold(), 1.0);
        reveal.threshold = f32::NAN;
        assert_eq!(reveal.effective_threshold(), 0.3);
    }
}
