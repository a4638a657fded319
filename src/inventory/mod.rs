// Inventory module
//
// Holds what the player has picked up. Items are only ever added: nothing in
// the level consumes them.

pub mod inventory;

pub use inventory::Inventory;
