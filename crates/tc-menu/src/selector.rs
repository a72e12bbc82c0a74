//! Parsing the user's menu choice.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A menu choice as typed by the user: a non-negative registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selector(u32);

impl Selector {
    /// Parse a line of input.
    ///
    /// Anything that is not a non-negative integer yields `None`, which the
    /// dispatcher treats exactly like a key that is not registered.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// The registry key this selector names.
    pub fn key(self) -> u32 {
        self.0
    }
}

impl FromStr for Selector {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for Selector {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
