//! The closed set of creature kinds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::creature::Creature;
use crate::error::BestiaryError;
use crate::variants::{Skeleton, Vampire, Zombie};

/// Every kind of creature the bestiary knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureKind {
    /// See [`Vampire`].
    Vampire,
    /// See [`Zombie`].
    Zombie,
    /// See [`Skeleton`].
    Skeleton,
}

impl CreatureKind {
    /// All kinds, in bestiary order.
    pub const ALL: [CreatureKind; 3] = [Self::Vampire, Self::Zombie, Self::Skeleton];

    /// Vitality a freshly spawned creature of this kind starts with.
    pub fn default_vitality(self) -> i32 {
        match self {
            Self::Vampire => Vampire::DEFAULT_VITALITY,
            Self::Zombie => Zombie::DEFAULT_VITALITY,
            Self::Skeleton => Skeleton::DEFAULT_VITALITY,
        }
    }

    /// Spawn a creature with default vitality.
    pub fn spawn(self) -> Box<dyn Creature> {
        self.spawn_with(self.default_vitality())
    }

    /// Spawn a creature with explicit vitality.
    pub fn spawn_with(self, vitality: i32) -> Box<dyn Creature> {
        match self {
            Self::Vampire => Box::new(Vampire::with_vitality(vitality)),
            Self::Zombie => Box::new(Zombie::with_vitality(vitality)),
            Self::Skeleton => Box::new(Skeleton::with_vitality(vitality)),
        }
    }

    /// Summarize what a fresh creature of this kind says and does.
    pub fn profile(self) -> CreatureProfile {
        let creature = self.spawn();
        CreatureProfile {
            kind: self,
            vitality: creature.vitality().get(),
            attack: creature.attack(),
            speak: creature.speak(),
            describe: creature.describe(),
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vampire => write!(f, "vampire"),
            Self::Zombie => write!(f, "zombie"),
            Self::Skeleton => write!(f, "skeleton"),
        }
    }
}

impl FromStr for CreatureKind {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vampire" => Ok(Self::Vampire),
            "zombie" => Ok(Self::Zombie),
            "skeleton" => Ok(Self::Skeleton),
            _ => Err(BestiaryError::UnknownKind(s.to_string())),
        }
    }
}

/// A serializable summary of one creature kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureProfile {
    /// The kind described.
    pub kind: CreatureKind,
    /// Default starting vitality.
    pub vitality: i32,
    /// Attack text.
    pub attack: &'static str,
    /// Quote.
    pub speak: &'static str,
    /// Self-description.
    pub describe: &'static str,
}
