//! The interactive menu loop.

use std::io::{self, IsTerminal};

use tc_menu::{Menu, MenuConfig};

use crate::demos;

/// Run the menu on the console until the user picks something unlisted.
pub fn run(pause: bool, clear: bool) -> Result<(), String> {
    let config = MenuConfig::default()
        .with_pause(pause)
        .with_clear_screen(clear && io::stdout().is_terminal());

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), config);
    let completed = menu.run(demos::build_registry).map_err(|e| e.to_string())?;

    tracing::info!(completed, "menu closed");
    Ok(())
}
