use catalog_core::{Color, Item, ItemId, Size};

/// Deterministic demo catalog of `len` items.
///
/// Walks the color/size grid so every combination appears once per
/// `Color::ALL.len() * Size::ALL.len()` items. Ids are the sequence number.
pub fn sample_catalog(len: usize) -> Vec<Item> {
    let combos = Color::ALL.len() * Size::ALL.len();
    (0..len)
        .map(|n| {
            let slot = n % combos;
            let color = Color::ALL[slot / Size::ALL.len()];
            let size = Size::ALL[slot % Size::ALL.len()];
            Item::with_id(
                ItemId::from_u128(n as u128 + 1),
                format!("{color} {size} #{n}"),
                color,
                size,
            )
        })
        .collect()
}
