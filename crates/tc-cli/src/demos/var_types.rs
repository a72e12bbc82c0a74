//! Primitive type sizes and ranges.

use std::io::{self, Write};

use comfy_table::{ContentArrangement, Table};

use super::heading;

/// One row of the table: type name, size in bytes, minimum, maximum.
pub type TypeRow = [String; 4];

macro_rules! numeric_row {
    ($t:ty) => {
        [
            stringify!($t).to_string(),
            size_of::<$t>().to_string(),
            <$t>::MIN.to_string(),
            <$t>::MAX.to_string(),
        ]
    };
}

/// Rows grouped by family.
pub fn groups() -> Vec<(&'static str, Vec<TypeRow>)> {
    vec![
        (
            "Char types",
            vec![[
                "char".to_string(),
                size_of::<char>().to_string(),
                format!("U+{:04X}", '\0' as u32),
                format!("U+{:04X}", char::MAX as u32),
            ]],
        ),
        (
            "Signed ints",
            vec![
                numeric_row!(i8),
                numeric_row!(i16),
                numeric_row!(i32),
                numeric_row!(i64),
                numeric_row!(i128),
                numeric_row!(isize),
            ],
        ),
        (
            "Unsigned ints",
            vec![
                numeric_row!(u8),
                numeric_row!(u16),
                numeric_row!(u32),
                numeric_row!(u64),
                numeric_row!(u128),
                numeric_row!(usize),
            ],
        ),
        (
            "Floating point (smallest positive normal to max)",
            vec![
                [
                    "f32".to_string(),
                    size_of::<f32>().to_string(),
                    format!("{:e}", f32::MIN_POSITIVE),
                    format!("{:e}", f32::MAX),
                ],
                [
                    "f64".to_string(),
                    size_of::<f64>().to_string(),
                    format!("{:e}", f64::MIN_POSITIVE),
                    format!("{:e}", f64::MAX),
                ],
            ],
        ),
        (
            "Boolean",
            vec![[
                "bool".to_string(),
                size_of::<bool>().to_string(),
                false.to_string(),
                true.to_string(),
            ]],
        ),
    ]
}

/// Print one table per family.
pub fn render(out: &mut dyn Write) -> io::Result<()> {
    for (title, rows) in groups() {
        heading(out, title)?;
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Type", "Bytes", "Min", "Max"]);
        for row in rows {
            table.add_row(row.to_vec());
        }
        writeln!(out, "{table}")?;
        writeln!(out)?;
    }
    Ok(())
}
