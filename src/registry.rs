//! Tag registry
//!
//! One [`TagEntry`] per distinct tag name seen since activation (or since the
//! last theme change). Entries keep first-seen order, their resolved color,
//! and the decoration currently rendered for them.

use indexmap::IndexMap;
use tracing::debug;

use crate::document::TextRange;
use crate::error::ScanError;
use crate::palette::ColorPalette;
use crate::scan::{CommentSetting, TagScanner};

/// Decoration state of one tag
#[derive(Debug)]
pub enum DecorationState<H> {
    /// No decoration exists for the tag
    Unregistered,
    /// A live decoration and the ranges last applied to it
    Registered { handle: H, ranges: Vec<TextRange> },
}

/// A registered tag name
#[derive(Debug)]
pub struct TagEntry<H> {
    name: String,
    color: String,
    state: DecorationState<H>,
    scanner: Option<TagScanner>,
}

impl<H> TagEntry<H> {
    fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            state: DecorationState::Unregistered,
            scanner: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn state(&self) -> &DecorationState<H> {
        &self.state
    }

    /// Check if a decoration is attached
    pub fn is_registered(&self) -> bool {
        matches!(self.state, DecorationState::Registered { .. })
    }

    /// Ranges from the last render (empty when unregistered)
    pub fn ranges(&self) -> &[TextRange] {
        match &self.state {
            DecorationState::Registered { ranges, .. } => ranges,
            DecorationState::Unregistered => &[],
        }
    }

    /// Detach the live decoration so it can be disposed
    pub fn release(&mut self) -> Option<H> {
        match std::mem::replace(&mut self.state, DecorationState::Unregistered) {
            DecorationState::Registered { handle, .. } => Some(handle),
            DecorationState::Unregistered => None,
        }
    }

    /// Attach a freshly created decoration
    ///
    /// Returns the handle it displaced if [`TagEntry::release`] was skipped.
    #[must_use = "a displaced handle must be disposed"]
    pub fn attach(&mut self, handle: H, ranges: Vec<TextRange>) -> Option<H> {
        let displaced = self.release();
        self.state = DecorationState::Registered { handle, ranges };
        displaced
    }

    /// Consume the entry, yielding its live decoration
    pub fn into_handle(self) -> Option<H> {
        match self.state {
            DecorationState::Registered { handle, .. } => Some(handle),
            DecorationState::Unregistered => None,
        }
    }

    /// Scan text for this tag
    ///
    /// The compiled scanner is cached and rebuilt only when the comment
    /// setting changes.
    pub fn scan(
        &mut self,
        text: &str,
        comments: &CommentSetting,
    ) -> Result<Vec<TextRange>, ScanError> {
        let scanner = match self.scanner.take() {
            Some(scanner) if scanner.comments() == comments => scanner,
            _ => TagScanner::new(&self.name, comments)?,
        };
        let ranges = scanner.scan(text);
        self.scanner = Some(scanner);
        Ok(ranges)
    }
}

/// Tag names seen so far, in first-seen order
#[derive(Debug)]
pub struct TagRegistry<H> {
    entries: IndexMap<String, TagEntry<H>>,
}

impl<H> TagRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Register a tag name, resolving its color once
    ///
    /// Returns `true` if the name was new.
    pub fn register(&mut self, name: &str, palette: &ColorPalette) -> bool {
        if self.contains(name) {
            return false;
        }
        let color = palette.resolve(name);
        debug!(tag = name, color, "registered tag");
        self.entries.insert(name.to_string(), TagEntry::new(name, color));
        true
    }

    pub fn get(&self, name: &str) -> Option<&TagEntry<H>> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TagEntry<H>> {
        self.entries.get_mut(name)
    }

    /// Registered names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry<H>> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TagEntry<H>> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every tag, returning the live handles for disposal
    #[must_use = "released handles must be disposed"]
    pub fn clear(&mut self) -> Vec<H> {
        self.drain().filter_map(TagEntry::into_handle).collect()
    }

    /// Empty the registry, yielding every entry
    pub fn drain(&mut self) -> impl Iterator<Item = TagEntry<H>> + '_ {
        self.entries.drain(..).map(|(_, entry)| entry)
    }
}

impl<H> Default for TagRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{fallback_index, ThemeKind};

    fn palette() -> ColorPalette {
        ColorPalette::build(ThemeKind::Dark)
    }

    #[test]
    fn test_register_once() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        assert!(registry.register("div", &palette));
        assert!(!registry.register("div", &palette));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("div").unwrap().color(), "rgb(255, 255, 200)");
    }

    #[test]
    fn test_unknown_name_uses_fallback() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        registry.register("router", &palette);
        let expected = palette.ordered().nth(fallback_index("router")).unwrap().1;
        assert_eq!(registry.get("router").unwrap().color(), expected);
    }

    #[test]
    fn test_color_kept_across_palettes() {
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        registry.register("div", &ColorPalette::build(ThemeKind::Dark));
        // Already registered: the light palette is never consulted
        registry.register("div", &ColorPalette::build(ThemeKind::Light));
        assert_eq!(registry.get("div").unwrap().color(), "rgb(255, 255, 200)");
    }

    #[test]
    fn test_names_in_first_seen_order() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        for name in ["ul", "li", "a", "li"] {
            registry.register(name, &palette);
        }
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ul", "li", "a"]);
    }

    #[test]
    fn test_release_and_attach() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        registry.register("p", &palette);
        let entry = registry.get_mut("p").unwrap();

        assert!(!entry.is_registered());
        assert_eq!(entry.release(), None);

        assert_eq!(entry.attach(1, vec![TextRange::new(0, 3)]), None);
        assert!(entry.is_registered());
        assert_eq!(entry.ranges(), &[TextRange::new(0, 3)]);

        assert_eq!(entry.release(), Some(1));
        assert!(entry.ranges().is_empty());

        // Attaching over a live handle hands the old one back
        assert_eq!(entry.attach(2, Vec::new()), None);
        assert_eq!(entry.attach(3, Vec::new()), Some(2));
    }

    #[test]
    fn test_clear_yields_handles() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        registry.register("a", &palette);
        registry.register("b", &palette);
        let _ = registry.get_mut("a").unwrap().attach(7, Vec::new());

        assert_eq!(registry.clear(), vec![7]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_scan_caches_per_setting() {
        let palette = palette();
        let mut registry: TagRegistry<u32> = TagRegistry::new();
        registry.register("b", &palette);
        let entry = registry.get_mut("b").unwrap();

        let html = CommentSetting::default();
        let jsx = CommentSetting::literal("{/*", "*/}");
        let text = "<!-- <b> --> {/* <b> */}";

        assert_eq!(entry.scan(text, &html).unwrap(), vec![TextRange::new(17, 20)]);
        assert_eq!(entry.scan(text, &jsx).unwrap(), vec![TextRange::new(5, 8)]);
        assert_eq!(entry.scan(text, &html).unwrap(), vec![TextRange::new(17, 20)]);
    }
}
