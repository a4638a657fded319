/// The item types a level can contain.
///
/// Each belongs to one of the two playable roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Janitor,
    Banker,
}

impl ItemKind {
    /// Display name shown in logs and UI
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Janitor => "janitor item",
            ItemKind::Banker => "banker item",
        }
    }
}
