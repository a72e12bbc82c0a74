//! Ordered key → (label, action) registry.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::error::{MenuError, MenuResult};

/// A zero-argument, side-effecting menu action.
pub type Action<'a> = Box<dyn FnMut() -> MenuResult<()> + 'a>;

/// One labelled action in a [`Registry`].
pub struct MenuEntry<'a> {
    label: String,
    action: Action<'a>,
}

impl<'a> MenuEntry<'a> {
    /// Create an entry.
    pub fn new(label: impl Into<String>, action: impl FnMut() -> MenuResult<()> + 'a) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    /// The text shown in the menu.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the action. Failures are tagged with this entry's label.
    pub fn invoke(&mut self) -> MenuResult<()> {
        (self.action)().map_err(|e| match e {
            MenuError::Action { .. } => e,
            other => MenuError::Action {
                label: self.label.clone(),
                message: other.to_string(),
            },
        })
    }
}

impl fmt::Debug for MenuEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The menu: entries iterate in ascending key order.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    entries: BTreeMap<u32, MenuEntry<'a>>,
}

impl<'a> Registry<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Registry::insert`].
    pub fn with(
        mut self,
        key: u32,
        label: impl Into<String>,
        action: impl FnMut() -> MenuResult<()> + 'a,
    ) -> Self {
        self.insert(key, label, action);
        self
    }

    /// Bind `key` to an action, returning any entry it replaces.
    pub fn insert(
        &mut self,
        key: u32,
        label: impl Into<String>,
        action: impl FnMut() -> MenuResult<()> + 'a,
    ) -> Option<MenuEntry<'a>> {
        self.entries.insert(key, MenuEntry::new(label, action))
    }

    /// Look up an entry.
    pub fn get(&self, key: u32) -> Option<&MenuEntry<'a>> {
        self.entries.get(&key)
    }

    /// Look up an entry for invocation.
    pub fn get_mut(&mut self, key: u32) -> Option<&mut MenuEntry<'a>> {
        self.entries.get_mut(&key)
    }

    /// Returns true if `key` is bound.
    pub fn contains(&self, key: u32) -> bool {
        self.entries.contains_key(&key)
    }

    /// Bound keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Keys and labels in ascending key order.
    pub fn labels(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.entries.iter().map(|(k, e)| (*k, e.label()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the action bound to `key`, if any.
    pub fn invoke(&mut self, key: u32) -> Option<MenuResult<()>> {
        self.get_mut(key).map(MenuEntry::invoke)
    }

    /// Write one `"<key>) <label>"` line per entry.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for (key, label) in self.labels() {
            writeln!(out, "{key}) {label}")?;
        }
        Ok(())
    }
}
