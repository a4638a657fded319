use crate::item::{ItemKind, ItemStack};

/// Ordered record of collected items.
///
/// One stack per item kind, in the order each kind was first picked up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|stack| stack.quantity == 0)
    }

    /// Total number of items across all stacks
    pub fn total(&self) -> u32 {
        self.stacks.iter().map(|stack| stack.quantity).sum()
    }

    /// Counts how many of a specific kind are held
    pub fn count(&self, kind: ItemKind) -> u32 {
        self.stacks
            .iter()
            .filter(|stack| stack.kind == kind)
            .map(|stack| stack.quantity)
            .sum()
    }

    /// Adds one item, stacking with an existing stack of the same kind
    pub fn add(&mut self, kind: ItemKind) {
        match self.stacks.iter_mut().find(|stack| stack.can_merge_with(kind)) {
            Some(stack) => stack.add(1),
            None => self.stacks.push(ItemStack::new(kind, 1)),
        }
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }
}
