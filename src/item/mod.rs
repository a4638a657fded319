// Item system module
//
// - kind.rs: the two item types a level can place
// - stack.rs: quantity of one kind, as held in an inventory
// - pickup.rs: an item lying in the level, falling under gravity

pub mod kind;
pub mod pickup;
pub mod stack;

pub use kind::ItemKind;
pub use pickup::Item;
pub use stack::ItemStack;
