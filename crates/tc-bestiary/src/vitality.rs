//! Creature health and damage reports.
//!
//! Unlike a clamped resource track, vitality has no floor and no cap:
//! overkill drives it negative and healing can push it past the starting
//! value. Only the `i32` bounds themselves are respected (saturating).

use std::fmt;

/// Remaining health of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vitality(i32);

impl Vitality {
    /// Create a vitality value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Subtract `amount` (negative heals). Returns the new value.
    pub fn apply(&mut self, amount: i32) -> i32 {
        self.0 = self.0.saturating_sub(amount);
        self.0
    }
}

impl fmt::Display for Vitality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of a single damage (or heal) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    /// Name of the creature that was hit.
    pub target: &'static str,
    /// Signed amount as requested; negative means healing.
    pub amount: i32,
    /// Vitality after the event.
    pub vitality: i32,
}

impl DamageReport {
    /// Returns true if this event healed the creature.
    pub fn is_heal(&self) -> bool {
        self.amount < 0
    }

    /// Returns true if the creature is at or below zero vitality.
    pub fn is_defeated(&self) -> bool {
        self.vitality <= 0
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.is_heal() { "Healing" } else { "Dealing" };
        write!(f, "{}: {verb} {} damage", self.target, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(amount: i32, vitality: i32) -> DamageReport {
        DamageReport {
            target: "Zombie",
            amount,
            vitality,
        }
    }

    #[test]
    fn apply_subtracts() {
        let mut v = Vitality::new(10);
        assert_eq!(v.apply(3), 7);
        assert_eq!(v.get(), 7);
    }

    #[test]
    fn negative_amount_heals_past_start() {
        let mut v = Vitality::new(10);
        assert_eq!(v.apply(-15), 25);
    }

    #[test]
    fn no_floor() {
        let mut v = Vitality::new(5);
        assert_eq!(v.apply(50), -45);
    }

    #[test]
    fn zero_damage_leaves_value() {
        let mut v = Vitality::new(5);
        assert_eq!(v.apply(0), 5);
    }

    #[test]
    fn saturates_at_bounds() {
        let mut v = Vitality::new(i32::MIN + 1);
        assert_eq!(v.apply(10), i32::MIN);

        let mut v = Vitality::new(i32::MAX - 1);
        assert_eq!(v.apply(-10), i32::MAX);
    }

    #[test]
    fn defeat_threshold_is_zero() {
        assert!(report(5, 0).is_defeated());
        assert!(report(5, -3).is_defeated());
        assert!(!report(5, 1).is_defeated());
    }

    #[test]
    fn heal_is_negative_amount() {
        assert!(report(-1, 11).is_heal());
        assert!(!report(0, 10).is_heal());
    }

    #[test]
    fn report_display_names_target() {
        insta::assert_snapshot!(report(4, 6), @"Zombie: Dealing 4 damage");
        insta::assert_snapshot!(report(-3, 9), @"Zombie: Healing -3 damage");
        insta::assert_snapshot!(report(0, 10), @"Zombie: Dealing 0 damage");
    }

    #[test]
    fn display() {
        assert_eq!(Vitality::new(42).to_string(), "42");
    }
}
