// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive inventory
// tracker.
//
// Module responsibilities:
// - `inventory`: The in-memory product collection, id allocation and the
//   validation rules guarding every mutation.
// - `ui`: Implements the terminal prompt flows (add, update stock, view,
//   remove) and delegates all state changes to `inventory`.
//
// State lives only for the duration of one run; there is no persistence.
pub mod inventory;
pub mod ui;
