use std::collections::HashMap;

use catalog_core::{Color, Item, Size};

use crate::options::SearchOptions;
use crate::results::SearchResults;

/// Structural bucket key: one exact (color, size) pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub color: Color,
    pub size: Size,
}

impl BucketKey {
    pub fn new(color: Color, size: Size) -> Self {
        Self { color, size }
    }

    pub fn of(item: &Item) -> Self {
        Self::new(item.color(), item.size())
    }
}

/// Items sharing one key, as positions into the catalog (first-seen order).
#[derive(Debug, Clone)]
struct Bucket {
    key: BucketKey,
    positions: Vec<usize>,
}

#[derive(Debug, Clone)]
struct Grouping {
    items: Vec<Item>,
    /// Bucket order = order in which each key first appears in `items`.
    buckets: Vec<Bucket>,
    lookup: HashMap<BucketKey, usize>,
}

impl Grouping {
    fn build(items: Vec<Item>) -> Self {
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut lookup: HashMap<BucketKey, usize> = HashMap::new();

        for (position, item) in items.iter().enumerate() {
            let key = BucketKey::of(item);
            let slot = *lookup.entry(key).or_insert_with(|| {
                buckets.push(Bucket {
                    key,
                    positions: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].positions.push(position);
        }

        Self {
            items,
            buckets,
            lookup,
        }
    }

    fn bucket(&self, key: BucketKey) -> Option<&Bucket> {
        self.lookup.get(&key).map(|&slot| &self.buckets[slot])
    }

    fn extend_from(&self, out: &mut Vec<Item>, bucket: &Bucket) {
        out.extend(bucket.positions.iter().map(|&p| self.items[p].clone()));
    }
}

/// Which branch of [`CatalogIndex::search`] produced a result set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SearchCase {
    EmptyCatalog,
    Unfiltered,
    Pairs,
    ColorsOnly,
    SizesOnly,
    NoCriteria,
}

/// Read-only index over a catalog fixed at construction.
///
/// - Items are grouped by their exact `(color, size)` pair once, up front.
/// - Queries never alter state, so a shared `&CatalogIndex` can serve any number
///   of threads.
/// - An index built from `None` is permanently empty: every search returns no
///   items and all-zero counts.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    grouping: Option<Grouping>,
}

impl CatalogIndex {
    pub fn new(items: Option<Vec<Item>>) -> Self {
        let grouping = items.map(Grouping::build);
        match &grouping {
            Some(g) => tracing::debug!(
                items = g.items.len(),
                buckets = g.buckets.len(),
                "catalog index built"
            ),
            None => tracing::debug!("catalog index built without items"),
        }
        Self { grouping }
    }

    /// An index with no catalog.
    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn len(&self) -> usize {
        self.grouping.as_ref().map_or(0, |g| g.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The catalog in source order.
    pub fn items(&self) -> &[Item] {
        self.grouping
            .as_ref()
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn bucket_count(&self) -> usize {
        self.grouping.as_ref().map_or(0, |g| g.buckets.len())
    }

    /// Keys of every non-empty bucket, in first-seen order.
    pub fn bucket_keys(&self) -> impl Iterator<Item = BucketKey> + '_ {
        self.grouping
            .iter()
            .flat_map(|g| g.buckets.iter().map(|b| b.key))
    }

    /// Items with exactly this color and size, in catalog order.
    pub fn bucket(&self, color: Color, size: Size) -> impl Iterator<Item = &Item> + '_ {
        self.grouping.iter().flat_map(move |g| {
            g.bucket(BucketKey::new(color, size))
                .into_iter()
                .flat_map(move |b| b.positions.iter().map(move |&p| &g.items[p]))
        })
    }

    /// Evaluate `options` against the catalog.
    ///
    /// - `None` returns the whole catalog.
    /// - Colors and sizes both given: positional (color, size) pairs. Matching
    ///   buckets come back in bucket order; a pair listed twice contributes its
    ///   bucket twice.
    /// - Only colors: every bucket of each requested color, per request.
    /// - Only sizes: every bucket of each requested size, per request.
    /// - Neither: nothing.
    ///
    /// Never fails; unknown combinations simply contribute no items.
    pub fn search(&self, options: Option<&SearchOptions>) -> SearchResults {
        let (case, items) = self.select(options);
        tracing::trace!(case = ?case, matched = items.len(), "catalog search");
        SearchResults::from_items(items)
    }

    fn select(&self, options: Option<&SearchOptions>) -> (SearchCase, Vec<Item>) {
        let Some(grouping) = &self.grouping else {
            return (SearchCase::EmptyCatalog, Vec::new());
        };
        let Some(options) = options else {
            return (SearchCase::Unfiltered, grouping.items.clone());
        };

        let mut out = Vec::new();
        let case = match (options.colors.is_empty(), options.sizes.is_empty()) {
            (false, false) => {
                let mut wanted: HashMap<BucketKey, usize> = HashMap::new();
                for (color, size) in options.pairs() {
                    *wanted.entry(BucketKey::new(color, size)).or_default() += 1;
                }
                for bucket in &grouping.buckets {
                    let times = wanted.get(&bucket.key).copied().unwrap_or(0);
                    for _ in 0..times {
                        grouping.extend_from(&mut out, bucket);
                    }
                }
                SearchCase::Pairs
            }
            (false, true) => {
                for &color in &options.colors {
                    for bucket in grouping.buckets.iter().filter(|b| b.key.color == color) {
                        grouping.extend_from(&mut out, bucket);
                    }
                }
                SearchCase::ColorsOnly
            }
            (true, false) => {
                for &size in &options.sizes {
                    for bucket in grouping.buckets.iter().filter(|b| b.key.size == size) {
                        grouping.extend_from(&mut out, bucket);
                    }
                }
                SearchCase::SizesOnly
            }
            (true, true) => SearchCase::NoCriteria,
        };
        (case, out)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Item>> for CatalogIndex {
    fn from(items: Vec<Item>) -> Self {
        Self::new(Some(items))
    }
}
