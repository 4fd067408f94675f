use serde::{Deserialize, Serialize};

use crate::model::{CellId, ItemKind};

/// One storage slot in the warehouse grid.
///
/// Cells are created in a batch at session start and never change afterwards;
/// a new session replaces the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    item: ItemKind,
}

impl Cell {
    /// Creates a new cell holding the given item.
    #[must_use]
    pub fn new(id: CellId, item: ItemKind) -> Self {
        Self { id, item }
    }

    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[must_use]
    pub fn item(&self) -> ItemKind {
        self.item
    }
}
