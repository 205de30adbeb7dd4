//! Effect vocabulary shared by the scheduler and the renderer.

use serde::{Deserialize, Serialize};

/// Cosmetic overlay rendered while an effect is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    #[default]
    Explosion,
    ChakraSurge,
    LightningStorm,
    FireTornado,
    IceShards,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Explosion,
        EffectKind::ChakraSurge,
        EffectKind::LightningStorm,
        EffectKind::FireTornado,
        EffectKind::IceShards,
    ];

    /// Stable identifier, same spelling as the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::Explosion => "explosion",
            EffectKind::ChakraSurge => "chakra-surge",
            EffectKind::LightningStorm => "lightning-storm",
            EffectKind::FireTornado => "fire-tornado",
            EffectKind::IceShards => "ice-shards",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly an overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    /// Opacity/scale utility classes applied to the overlay root.
    pub fn css_class(self) -> &'static str {
        match self {
            Intensity::Low => "opacity-30 scale-75",
            Intensity::Medium => "opacity-60 scale-100",
            Intensity::High => "opacity-90 scale-125",
        }
    }
}

/// Element of a battle-scene character's signature technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JutsuType {
    Fire,
    Lightning,
    Shadow,
    Wind,
    Water,
}

impl JutsuType {
    pub fn glyph(self) -> &'static str {
        match self {
            JutsuType::Fire => "🔥",
            JutsuType::Lightning => "⚡",
            JutsuType::Shadow => "🌑",
            JutsuType::Wind => "🌪️",
            JutsuType::Water => "🌊",
        }
    }

    /// Overlay flashed while the character's technique fires.
    pub fn signature_effect(self) -> EffectKind {
        match self {
            JutsuType::Fire => EffectKind::FireTornado,
            JutsuType::Lightning => EffectKind::LightningStorm,
            JutsuType::Shadow => EffectKind::ChakraSurge,
            JutsuType::Wind => EffectKind::Explosion,
            JutsuType::Water => EffectKind::IceShards,
        }
    }
}

/// Horizontal slot a battle-scene character occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StagePosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FigureSize {
    pub fn css_class(self) -> &'static str {
        match self {
            FigureSize::Small => "w-16 h-20",
            FigureSize::Medium => "w-24 h-30",
            FigureSize::Large => "w-32 h-40",
        }
    }
}

/// One animated character in the hero battle scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleCharacter {
    pub position: StagePosition,
    pub jutsu: JutsuType,
    #[serde(default)]
    pub size: FigureSize,
    /// Delay before the character switches to its active pose.
    #[serde(default)]
    pub entrance_delay_ms: u64,
}

impl BattleCharacter {
    pub const fn new(
        position: StagePosition,
        jutsu: JutsuType,
        size: FigureSize,
        entrance_delay_ms: u64,
    ) -> Self {
        Self {
            position,
            jutsu,
            size,
            entrance_delay_ms,
        }
    }
}
