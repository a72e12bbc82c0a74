//! The `Creature` capability set.

use crate::sealed::{Body, Token};
use crate::vitality::{DamageReport, Vitality};

/// What any undead says when a variant has nothing better to add.
pub const DEFAULT_RETORT: &str = "Death is overrated";

/// Self-description shared by every variant that does not override it.
pub const UNDEAD_DESCRIPTION: &str = "I am undead";

/// An undead creature.
///
/// The set of creatures is closed: only the variants in this crate implement
/// it, and each must supply `attack`. A type from elsewhere is rejected:
///
/// ```compile_fail
/// use tc_bestiary::{Creature, Vitality};
///
/// struct Ghost {
///     vitality: Vitality,
/// }
///
/// impl Creature for Ghost {
///     fn name(&self) -> &'static str {
///         "Ghost"
///     }
///     fn vitality(&self) -> Vitality {
///         self.vitality
///     }
/// }
/// ```
///
/// Vitality changes only through [`Creature::strike`] (or
/// [`Creature::damage`]), so every change produces a report:
///
/// ```compile_fail
/// use tc_bestiary::{Creature, Vitality, Zombie};
///
/// let mut rob = Zombie::new();
/// let handle: &mut dyn Creature = &mut rob;
/// *handle.vitality_mut() = Vitality::new(-999);
/// ```
///
/// All capabilities dispatch through `&dyn Creature` to the most specific
/// implementation:
///
/// ```
/// use tc_bestiary::{Creature, Vampire};
///
/// let mut alucard = Vampire::new();
/// let handle: &mut dyn Creature = &mut alucard;
/// assert_eq!(handle.describe(), "I am a vampire");
/// assert!(!handle.damage(99));
/// assert!(handle.damage(1));
/// ```
pub trait Creature: Body {
    /// Variant name, used in reports and logs.
    fn name(&self) -> &'static str;

    /// Current vitality.
    fn vitality(&self) -> Vitality;

    /// Describe this creature's attack.
    fn attack(&self) -> &'static str;

    /// A characteristic quote.
    fn speak(&self) -> &'static str {
        DEFAULT_RETORT
    }

    /// Self-identification.
    fn describe(&self) -> &'static str {
        UNDEAD_DESCRIPTION
    }

    /// Report current vitality.
    fn show_status(&self) -> String {
        format!("Current vitality: {}", self.vitality())
    }

    /// Apply a damage event (negative heals) and return its report.
    fn strike(&mut self, amount: i32) -> DamageReport {
        let report = DamageReport {
            target: self.name(),
            amount,
            vitality: Body::vitality_mut(self, Token::new()).apply(amount),
        };
        tracing::debug!(
            creature = report.target,
            amount,
            vitality = report.vitality,
            heal = report.is_heal(),
            "damage applied"
        );
        report
    }

    /// Apply a damage event. Returns true if the creature is now defeated.
    fn damage(&mut self, amount: i32) -> bool {
        self.strike(amount).is_defeated()
    }
}
