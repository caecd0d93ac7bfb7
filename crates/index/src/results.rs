use serde::{Deserialize, Serialize};

use catalog_core::{Color, Item, Size};

/// Number of result items of one size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCount {
    pub size: Size,
    pub count: usize,
}

/// Number of result items of one color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: Color,
    pub count: usize,
}

/// Matching items plus per-size and per-color tallies.
///
/// `size_counts` has one entry per `Size::ALL` member and `color_counts` one per
/// `Color::ALL` member, both in `ALL` order, zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub items: Vec<Item>,
    pub size_counts: Vec<SizeCount>,
    pub color_counts: Vec<ColorCount>,
}

impl SearchResults {
    /// Tally `items` against the full attribute sets.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            size_counts: Size::ALL
                .into_iter()
                .map(|size| SizeCount {
                    size,
                    count: items.iter().filter(|i| i.size() == size).count(),
                })
                .collect(),
            color_counts: Color::ALL
                .into_iter()
                .map(|color| ColorCount {
                    color,
                    count: items.iter().filter(|i| i.color() == color).count(),
                })
                .collect(),
            items,
        }
    }

    /// No items, every count zero.
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size_count(&self, size: Size) -> usize {
        self.size_counts
            .iter()
            .find(|c| c.size == size)
            .map_or(0, |c| c.count)
    }

    pub fn color_count(&self, color: Color) -> usize {
        self.color_counts
            .iter()
            .find(|c| c.color == color)
            .map_or(0, |c| c.count)
    }
}

impl Default for SearchResults {
    fn default() -> Self {
        Self::empty()
    }
}
