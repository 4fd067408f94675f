use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of shipment categories a storage cell can hold.
///
/// Both the grid and the picking orders draw from this set, so every order is
/// satisfiable in principle (though a given grid may not contain the item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Domestic,
    International,
    Express,
    Standard,
    Priority,
}

impl ItemKind {
    /// All item kinds, in display order.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Domestic,
        ItemKind::International,
        ItemKind::Express,
        ItemKind::Standard,
        ItemKind::Priority,
    ];

    /// Human-readable label shown on cells and in order prompts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Domestic => "Domestic",
            ItemKind::International => "International",
            ItemKind::Express => "Express",
            ItemKind::Standard => "Standard",
            ItemKind::Priority => "Priority",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
