//! Fixed-size arrays and their iterators.

use std::io::{self, Write};

const LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

fn joined<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
}

fn report(out: &mut dyn Write, label: &str, items: &[i32]) -> io::Result<()> {
    writeln!(out, "{label}: {}", joined(items.iter()))?;
    writeln!(out, "  size: {}, empty? {}", items.len(), items.is_empty())
}

/// Iterate a char array both ways, then fill an integer array.
pub fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Letters: {}", joined(LETTERS.iter()))?;
    writeln!(out, "Reverse iterating: {}", joined(LETTERS.iter().rev()))?;

    // Arrays must be initialized before use; start from zero.
    let mut container = [0i32; 10];
    report(out, "Container array", &container)?;
    container.fill(33);
    report(out, "After fill(33)", &container)?;
    Ok(())
}
