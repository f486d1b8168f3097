//! Style pool for deduplication

use super::Style;
use ahash::AHashMap;

/// Handle to a style interned in a [`StylePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(u32);

impl StyleId {
    /// The pool's default style (all options unset)
    pub const DEFAULT: StyleId = StyleId(0);

    /// The raw pool index
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Style pool for deduplicating styles
///
/// Reports typically have many cells sharing the same style. The pool
/// ensures each unique style is stored only once, and cells reference
/// styles by id.
#[derive(Debug)]
pub struct StylePool {
    /// All unique styles (index 0 is default)
    styles: Vec<Style>,
    /// Fast lookup for deduplication
    index_map: AHashMap<StyleKey, u32>,
}

/// Key for style lookup (hash-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleKey(u64);

impl StyleKey {
    fn from_style(style: &Style) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = ahash::AHasher::default();
        style.hash(&mut hasher);
        StyleKey(hasher.finish())
    }
}

impl StylePool {
    /// Create a new style pool with the default style at index 0
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
        };

        // Index 0 is always the default style
        let default = Style::default();
        let key = StyleKey::from_style(&default);
        pool.styles.push(default);
        pool.index_map.insert(key, 0);

        pool
    }

    /// Get or create a style, returning its id
    ///
    /// If an identical style already exists, returns its id. Otherwise,
    /// adds the style and returns the new id.
    pub fn get_or_insert(&mut self, style: Style) -> StyleId {
        let key = StyleKey::from_style(&style);

        if let Some(&idx) = self.index_map.get(&key) {
            // Verify it's actually the same (hash collision check)
            if self.styles[idx as usize] == style {
                return StyleId(idx);
            }
        }

        // Not found or collision, add new
        let idx = self.styles.len() as u32;
        self.index_map.insert(key, idx);
        self.styles.push(style);
        StyleId(idx)
    }

    /// Get a style by id
    pub fn get(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id.0 as usize)
    }

    /// Get the number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool is empty (only has the default)
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their ids
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &Style)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleId(i as u32), s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
