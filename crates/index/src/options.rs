use serde::{Deserialize, Serialize};

use catalog_core::{Color, Size};

/// Filter criteria for [`CatalogIndex::search`](crate::CatalogIndex::search).
///
/// When both lists are non-empty they are paired **positionally**: the i-th
/// color goes with the i-th size and any unpaired tail is ignored. This is not
/// a cross product; `colors = [Red, Blue], sizes = [Small]` only asks for
/// `(Red, Small)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub sizes: Vec<Size>,
}

impl SearchOptions {
    /// Options with no criteria. Searching with these yields no items.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.sizes.push(size);
        self
    }

    /// Zipped (color, size) pairs; length is the shorter of the two lists.
    pub fn pairs(&self) -> impl Iterator<Item = (Color, Size)> + '_ {
        self.colors.iter().copied().zip(self.sizes.iter().copied())
    }
}
