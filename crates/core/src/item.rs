use serde::{Deserialize, Serialize};

use crate::attribute::{Color, Size};
use crate::id::ItemId;
use crate::value_object::ValueObject;

/// A catalog item tagged with exactly one color and one size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    color: Color,
    size: Size,
}

impl Item {
    /// Create an item with a fresh identifier.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self::with_id(ItemId::new(), name, color, size)
    }

    pub fn with_id(id: ItemId, name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            size,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl ValueObject for Item {}
