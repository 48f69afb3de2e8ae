// Entrypoint for the CLI application.
// - Keeps `main` small: create the session inventory and hand it to the
//   UI loop.
// - Returns `anyhow::Result` so a terminal I/O failure surfaces cleanly.

use stockpile_cli::{inventory::Inventory, ui::main_menu};

fn main() -> anyhow::Result<()> {
    // The inventory lives exactly as long as this run; choosing "Exit"
    // in the menu drops it with the process.
    let mut inventory = Inventory::new();

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(&mut inventory)?;
    Ok(())
}
