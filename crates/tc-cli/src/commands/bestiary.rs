//! Tabulate the creature kinds.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tc_bestiary::{CreatureKind, CreatureProfile};

/// Print profiles for every kind, or just `kind`, as a table or JSON.
pub fn run(kind: Option<&str>, json: bool) -> Result<(), String> {
    let kinds = match kind {
        Some(name) => vec![name.parse::<CreatureKind>().map_err(|e| e.to_string())?],
        None => CreatureKind::ALL.to_vec(),
    };
    let profiles: Vec<CreatureProfile> = kinds.into_iter().map(CreatureKind::profile).collect();

    if json {
        let out = serde_json::to_string_pretty(&profiles)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Vitality", "Attack", "Speak", "Describe"]);

    for p in &profiles {
        table.add_row(vec![
            p.kind.to_string(),
            p.vitality.to_string(),
            p.attack.to_string(),
            p.speak.to_string(),
            p.describe.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} {}", profiles.len(), "kinds".bold());
    Ok(())
}
