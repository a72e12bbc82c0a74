//! Undead creature hierarchy for the concepts tour.
//!
//! A [`Creature`] is a capability set with one required member
//! ([`Creature::attack`]) and overridable defaults for
//! [`Creature::speak`] and [`Creature::describe`]. The concrete variants
//! ([`Vampire`], [`Zombie`], [`Skeleton`]) are plain stack values that can
//! be borrowed as `&dyn Creature` handles.

pub mod creature;
pub mod error;
pub mod kind;
mod sealed;
pub mod variants;
pub mod vitality;

pub use creature::{Creature, DEFAULT_RETORT, UNDEAD_DESCRIPTION};
pub use error::BestiaryError;
pub use kind::{CreatureKind, CreatureProfile};
pub use variants::{Skeleton, Vampire, Zombie};
pub use vitality::{DamageReport, Vitality};
