//! Trait objects, default methods, and dynamic dispatch.

use std::io::{self, Write};

use tc_bestiary::{Creature, Skeleton, UNDEAD_DESCRIPTION, Vampire, Zombie};

use super::heading;

/// Exercise a creature through its concrete type (static dispatch).
fn tour_static<C: Creature>(out: &mut dyn Write, name: &str, creature: &C) -> io::Result<()> {
    writeln!(out, "{name}.describe(): {}", creature.describe())?;
    writeln!(out, "{name}.show_status(): {}", creature.show_status())?;
    writeln!(out, "{name}.attack(): {}", creature.attack())?;
    writeln!(out, "{name}.speak(): {}", creature.speak())
}

/// Exercise a creature through a `&dyn Creature` handle.
fn tour_dyn(out: &mut dyn Write, name: &str, handle: &dyn Creature) -> io::Result<()> {
    writeln!(out, "handle({name}).describe(): {}", handle.describe())?;
    writeln!(out, "handle({name}).show_status(): {}", handle.show_status())?;
    writeln!(out, "handle({name}).attack(): {}", handle.attack())?;
    writeln!(out, "handle({name}).speak(): {}", handle.speak())
}

fn hit(out: &mut dyn Write, name: &str, handle: &mut dyn Creature, amount: i32) -> io::Result<()> {
    let report = handle.strike(amount);
    writeln!(
        out,
        "{name}.damage({amount}): {report} -> {} (defeated: {})",
        handle.show_status(),
        report.is_defeated()
    )
}

/// Walk the creature hierarchy the way the menu shows it.
pub fn render(out: &mut dyn Write) -> io::Result<()> {
    let mut alucard = Vampire::new();
    let mut rob = Zombie::new();
    let mut kk = Skeleton::new();

    heading(out, "Concrete values")?;
    tour_static(out, "alucard", &alucard)?;
    tour_static(out, "rob", &rob)?;
    tour_static(out, "kk", &kk)?;

    writeln!(out)?;
    heading(out, "Through &dyn Creature handles")?;
    let handles: [(&str, &dyn Creature); 3] = [("rob", &rob), ("alucard", &alucard), ("kk", &kk)];
    for (name, handle) in handles {
        tour_dyn(out, name, handle)?;
    }

    writeln!(out)?;
    heading(out, "Without dynamic dispatch")?;
    writeln!(
        out,
        "A base-only describe would always answer: {UNDEAD_DESCRIPTION}"
    )?;

    writeln!(out)?;
    heading(out, "Damage and healing")?;
    hit(out, "rob", &mut rob, 4)?;
    hit(out, "rob", &mut rob, -3)?;
    hit(out, "kk", &mut kk, 5)?;
    hit(out, "alucard", &mut alucard, 0)?;
    hit(out, "alucard", &mut alucard, 150)?;
    Ok(())
}
