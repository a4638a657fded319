use super::ItemKind;

/// An amount of one item kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub kind: ItemKind,

    /// How many of this item (never zero once created)
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(kind: ItemKind, quantity: u32) -> Self {
        ItemStack { kind, quantity }
    }

    /// Stacks can merge if they hold the same kind
    pub fn can_merge_with(&self, kind: ItemKind) -> bool {
        self.kind == kind
    }

    /// Adds items to this stack, saturating at `u32::MAX`
    pub fn add(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }
}
