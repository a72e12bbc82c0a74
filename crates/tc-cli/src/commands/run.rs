//! Run a single demo by its menu key.

use tc_menu::MenuConfig;

use crate::demos;

/// Invoke the entry bound to `choice`, or say goodbye if there is none.
pub fn run(choice: u32) -> Result<(), String> {
    let mut registry = demos::build_registry();
    match registry.invoke(choice) {
        Some(result) => result.map_err(|e| e.to_string()),
        None => {
            tracing::info!(choice, "no menu entry for choice");
            println!("{}", MenuConfig::default().farewell);
            Ok(())
        }
    }
}
