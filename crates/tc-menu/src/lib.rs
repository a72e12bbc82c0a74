//! Console menu dispatch.
//!
//! A [`Registry`] maps small integer keys to labelled zero-argument
//! actions. [`run_cycle`] presents the labels, reads one selector and
//! either runs the bound action or terminates; [`Menu`] repeats cycles
//! with a freshly built registry until one terminates.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod selector;

pub use config::MenuConfig;
pub use dispatcher::{CycleState, Menu, run_cycle};
pub use error::{MenuError, MenuResult};
pub use registry::{Action, MenuEntry, Registry};
pub use selector::Selector;
