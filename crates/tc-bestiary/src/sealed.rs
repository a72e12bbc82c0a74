//! Mutable access to creature state, reachable only from inside the crate.

use crate::vitality::Vitality;

/// Permission to touch a creature's vitality directly. Cannot be built
/// outside this crate.
pub struct Token(());

impl Token {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

/// Implemented by every variant; keeps `Creature` closed to this crate.
pub trait Body {
    /// Mutable access to vitality. Only `Creature::strike` calls this.
    fn vitality_mut(&mut self, token: Token) -> &mut Vitality;
}
