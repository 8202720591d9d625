//! Trait identifiers

use serde::{Deserialize, Serialize};

/// One of the 26 trait categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraitId {
    Dominant,
    Submissive,
    Switch,
    Master,
    Slave,
    Owner,
    Pet,
    Little,
    Caregiver,
    Brat,
    BratTamer,
    Hunter,
    Prey,
    Sadist,
    Masochist,
    Spanker,
    Spankee,
    Rigger,
    RopeBunny,
    Degrader,
    Degradee,
    Top,
    Bottom,
    Servant,
    Vanilla,
    Experimentalist,
}

impl TraitId {
    /// Every trait, in taxonomy order
    pub const ALL: [TraitId; crate::TRAIT_COUNT] = [
        TraitId::Dominant,
        TraitId::Submissive,
        TraitId::Switch,
        TraitId::Master,
        TraitId::Slave,
        TraitId::Owner,
        TraitId::Pet,
        TraitId::Little,
        TraitId::Caregiver,
        TraitId::Brat,
        TraitId::BratTamer,
        TraitId::Hunter,
        TraitId::Prey,
        TraitId::Sadist,
        TraitId::Masochist,
        TraitId::Spanker,
        TraitId::Spankee,
        TraitId::Rigger,
        TraitId::RopeBunny,
        TraitId::Degrader,
        TraitId::Degradee,
        TraitId::Top,
        TraitId::Bottom,
        TraitId::Servant,
        TraitId::Vanilla,
        TraitId::Experimentalist,
    ];

    /// Stable string identifier (same as the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dominant => "dominant",
            Self::Submissive => "submissive",
            Self::Switch => "switch",
            Self::Master => "master",
            Self::Slave => "slave",
            Self::Owner => "owner",
            Self::Pet => "pet",
            Self::Little => "little",
            Self::Caregiver => "caregiver",
            Self::Brat => "brat",
            Self::BratTamer => "brat-tamer",
            Self::Hunter => "hunter",
            Self::Prey => "prey",
            Self::Sadist => "sadist",
            Self::Masochist => "masochist",
            Self::Spanker => "spanker",
            Self::Spankee => "spankee",
            Self::Rigger => "rigger",
            Self::RopeBunny => "rope-bunny",
            Self::Degrader => "degrader",
            Self::Degradee => "degradee",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Servant => "servant",
            Self::Vanilla => "vanilla",
            Self::Experimentalist => "experimentalist",
        }
    }

    /// Parse a raw identifier; unknown ids give `None`
    pub fn parse(raw: &str) -> Option<TraitId> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|t| t.as_str() == raw)
    }
}

impl std::fmt::Display for TraitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
