//! Concrete undead.

use crate::creature::Creature;
use crate::sealed::{Body, Token};
use crate::vitality::Vitality;

/// A vampire. Overrides every optional capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    vitality: Vitality,
}

impl Vampire {
    /// Starting vitality when none is given.
    pub const DEFAULT_VITALITY: i32 = 100;

    /// Create a vampire with default vitality.
    pub fn new() -> Self {
        Self::with_vitality(Self::DEFAULT_VITALITY)
    }

    /// Create a vampire with explicit vitality.
    pub fn with_vitality(vitality: i32) -> Self {
        Self {
            vitality: Vitality::new(vitality),
        }
    }
}

impl Default for Vampire {
    fn default() -> Self {
        Self::new()
    }
}

impl Body for Vampire {
    fn vitality_mut(&mut self, _: Token) -> &mut Vitality {
        &mut self.vitality
    }
}

impl Creature for Vampire {
    fn name(&self) -> &'static str {
        "Vampire"
    }

    fn vitality(&self) -> Vitality {
        self.vitality
    }

    fn attack(&self) -> &'static str {
        "FANGS OUT!"
    }

    fn speak(&self) -> &'static str {
        "Blood! Blood! I want your blood!"
    }

    fn describe(&self) -> &'static str {
        "I am a vampire"
    }
}

/// A zombie. Overrides every optional capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zombie {
    vitality: Vitality,
}

impl Zombie {
    /// Starting vitality when none is given.
    pub const DEFAULT_VITALITY: i32 = 10;

    /// Create a zombie with default vitality.
    pub fn new() -> Self {
        Self::with_vitality(Self::DEFAULT_VITALITY)
    }

    /// Create a zombie with explicit vitality.
    pub fn with_vitality(vitality: i32) -> Self {
        Self {
            vitality: Vitality::new(vitality),
        }
    }
}

impl Default for Zombie {
    fn default() -> Self {
        Self::new()
    }
}

impl Body for Zombie {
    fn vitality_mut(&mut self, _: Token) -> &mut Vitality {
        &mut self.vitality
    }
}

impl Creature for Zombie {
    fn name(&self) -> &'static str {
        "Zombie"
    }

    fn vitality(&self) -> Vitality {
        self.vitality
    }

    fn attack(&self) -> &'static str {
        "HAND SWIPE"
    }

    fn speak(&self) -> &'static str {
        "Braaaaains!"
    }

    fn describe(&self) -> &'static str {
        "I is zombie"
    }
}

/// A skeleton. Supplies only the required attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    vitality: Vitality,
}

impl Skeleton {
    /// Starting vitality when none is given.
    pub const DEFAULT_VITALITY: i32 = 5;

    /// Create a skeleton with default vitality.
    pub fn new() -> Self {
        Self::with_vitality(Self::DEFAULT_VITALITY)
    }

    /// Create a skeleton with explicit vitality.
    pub fn with_vitality(vitality: i32) -> Self {
        Self {
            vitality: Vitality::new(vitality),
        }
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Body for Skeleton {
    fn vitality_mut(&mut self, _: Token) -> &mut Vitality {
        &mut self.vitality
    }
}

impl Creature for Skeleton {
    fn name(&self) -> &'static str {
        "Skeleton"
    }

    fn vitality(&self) -> Vitality {
        self.vitality
    }

    fn attack(&self) -> &'static str {
        "Bone Storm!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vitality() {
        assert_eq!(Vampire::new().vitality().get(), 100);
        assert_eq!(Zombie::new().vitality().get(), 10);
        assert_eq!(Skeleton::new().vitality().get(), 5);
    }

    #[test]
    fn explicit_vitality() {
        assert_eq!(Vampire::with_vitality(7).vitality().get(), 7);
        assert_eq!(Zombie::with_vitality(-2).vitality().get(), -2);
        assert_eq!(Skeleton::with_vitality(500).vitality().get(), 500);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(Vampire::default(), Vampire::new());
        assert_eq!(Zombie::default(), Zombie::new());
        assert_eq!(Skeleton::default(), Skeleton::new());
    }

    #[test]
    fn names() {
        assert_eq!(Vampire::new().name(), "Vampire");
        assert_eq!(Zombie::new().name(), "Zombie");
        assert_eq!(Skeleton::new().name(), "Skeleton");
    }
}
