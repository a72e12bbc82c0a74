//! The demonstrations offered by the menu.

pub mod arrays;
pub mod inheritance;
pub mod var_types;

use std::io::{self, Write};

use colored::Colorize;
use tc_menu::{MenuResult, Registry};

/// Build the fixed menu. Deterministic: every call yields the same keys
/// and labels.
pub fn build_registry() -> Registry<'static> {
    Registry::new()
        .with(1, "Var Types", || to_stdout(var_types::render))
        .with(2, "Arrays with iterator", || to_stdout(arrays::render))
        .with(3, "Class inheritance and virtuals", || {
            to_stdout(inheritance::render)
        })
}

/// Run a demo against locked stdout.
fn to_stdout(demo: fn(&mut dyn Write) -> io::Result<()>) -> MenuResult<()> {
    let mut out = io::stdout().lock();
    demo(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Write a section heading.
fn heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_labels() {
        let reg = build_registry();
        assert_eq!(
            reg.labels().collect::<Vec<_>>(),
            vec![
                (1, "Var Types"),
                (2, "Arrays with iterator"),
                (3, "Class inheritance and virtuals"),
            ]
        );
    }

    #[test]
    fn registry_is_deterministic() {
        let a = build_registry();
        let b = build_registry();
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        assert_eq!(
            a.labels().collect::<Vec<_>>(),
            b.labels().collect::<Vec<_>>()
        );
    }
}
