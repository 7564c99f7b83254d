//! Decoration controller
//!
//! Reacts to host events by rediscovering tag names, rescanning every known
//! tag and swapping in fresh decorations. Each invocation runs in three
//! phases: resolve colors for new names, scan every tag, then apply. Nothing
//! is rendered until every scan has finished.

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::document::TextRange;
use crate::error::Result;
use crate::host::{DecorationStyle, EditorHost, HostEvent};
use crate::palette::{ColorPalette, ThemeKind};
use crate::registry::{TagEntry, TagRegistry};
use crate::scan::{CommentSetting, CommentTable, TagDiscovery};

/// Owns the palette and registry for one activation
pub struct DecorationController<H: EditorHost> {
    palette: ColorPalette,
    registry: TagRegistry<H::Handle>,
    comments: CommentTable,
    discovery: TagDiscovery,
    enabled: bool,
}

impl<H: EditorHost> DecorationController<H> {
    /// Create a controller from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            palette: ColorPalette::build(config.theme.unwrap_or_default()),
            registry: TagRegistry::new(),
            comments: config.comment_table(),
            discovery: TagDiscovery::new()?,
            enabled: config.enabled,
        })
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn registry(&self) -> &TagRegistry<H::Handle> {
        &self.registry
    }

    pub fn comments(&self) -> &CommentTable {
        &self.comments
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn highlighting on or off
    ///
    /// Turning it off releases every decoration.
    pub fn set_enabled(&mut self, host: &mut H, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.on_document_or_editor_changed(host);
        } else {
            self.release_all(host);
        }
    }

    /// Dispatch a host event
    pub fn handle_event(&mut self, host: &mut H, event: HostEvent) {
        debug!(?event, "host event");
        match event {
            HostEvent::ActiveEditorChanged | HostEvent::DocumentChanged => {
                self.on_document_or_editor_changed(host)
            }
            HostEvent::ThemeChanged => self.on_theme_changed(host),
        }
    }

    /// Startup: build the palette for the current theme and render once
    pub fn on_activate(&mut self, host: &mut H) {
        self.palette = ColorPalette::build(host.theme_kind());
        self.on_document_or_editor_changed(host);
    }

    /// Shutdown: release every decoration
    pub fn on_deactivate(&mut self, host: &mut H) {
        self.release_all(host);
    }

    /// Rebuild the palette, forget every tag and render from scratch
    pub fn on_theme_changed(&mut self, host: &mut H) {
        let theme: ThemeKind = host.theme_kind();
        self.palette = ColorPalette::build(theme);
        self.release_all(host);
        debug!(theme = theme.name(), "theme changed, registry cleared");
        self.on_document_or_editor_changed(host);
    }

    /// Rescan the active document and replace every tag's decoration
    pub fn on_document_or_editor_changed(&mut self, host: &mut H) {
        if !self.enabled {
            return;
        }
        let Some(document) = host.active_document() else {
            trace!("no active document");
            return;
        };
        let text = document.text();

        for name in self.discovery.discover(text) {
            self.registry.register(&name, &self.palette);
        }

        let comments = comment_setting_for(&self.comments, document.language_id());
        let scans: Vec<Vec<TextRange>> = self
            .registry
            .iter_mut()
            .map(|entry| match entry.scan(text, comments) {
                Ok(ranges) => ranges,
                Err(err) => {
                    warn!(tag = entry.name(), %err, "scan failed, tag left unhighlighted");
                    Vec::new()
                }
            })
            .collect();

        for (entry, ranges) in self.registry.iter_mut().zip(scans) {
            trace!(tag = entry.name(), ranges = ranges.len(), "applying decoration");
            redecorate(host, entry, ranges);
        }
    }

    /// Clear, dispose and forget every registered tag
    fn release_all(&mut self, host: &mut H) {
        let handles = self.registry.clear();
        let released = handles.len();
        for handle in handles {
            host.set_decorations(&handle, &[]);
            host.dispose_decoration(handle);
        }
        debug!(released, "released decorations");
    }
}

/// Comment setting for a language, falling back to the default entry when
/// the language's own entry is unusable
fn comment_setting_for<'a>(table: &'a CommentTable, language: &str) -> &'a CommentSetting {
    let setting = table.get(language);
    match setting.validate() {
        Ok(()) => setting,
        Err(err) => {
            warn!(language, %err, "invalid comment setting, using default");
            table.default_setting()
        }
    }
}

/// Dispose the old decoration, then create and fill a new one
fn redecorate<H: EditorHost>(
    host: &mut H,
    entry: &mut TagEntry<H::Handle>,
    ranges: Vec<TextRange>,
) {
    if let Some(old) = entry.release() {
        host.dispose_decoration(old);
    }
    let handle = host.create_decoration(&DecorationStyle::new(entry.color()));
    host.set_decorations(&handle, &ranges);
    if let Some(displaced) = entry.attach(handle, ranges) {
        host.dispose_decoration(displaced);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;
    use std::collections::HashMap;

    /// Host that records every call
    #[derive(Default)]
    struct FakeHost {
        document: Option<TextDocument>,
        theme: ThemeKind,
        next_id: u32,
        live: HashMap<u32, (String, Vec<TextRange>)>,
        disposed: Vec<u32>,
    }

    impl EditorHost for FakeHost {
        type Handle = u32;

        fn active_document(&self) -> Option<TextDocument> {
            self.document.clone()
        }

        fn theme_kind(&self) -> ThemeKind {
            self.theme
        }

        fn create_decoration(&mut self, style: &DecorationStyle) -> u32 {
            self.next_id += 1;
            self.live.insert(self.next_id, (style.color.clone(), Vec::new()));
            self.next_id
        }

        fn set_decorations(&mut self, handle: &u32, ranges: &[TextRange]) {
            let slot = self.live.get_mut(handle).expect("set on disposed decoration");
            slot.1 = ranges.to_vec();
        }

        fn dispose_decoration(&mut self, handle: u32) {
            assert!(self.live.remove(&handle).is_some(), "double dispose");
            self.disposed.push(handle);
        }
    }

    fn host_with(text: &str) -> FakeHost {
        FakeHost {
            document: Some(TextDocument::new(text, "html")),
            ..FakeHost::default()
        }
    }

    fn controller() -> DecorationController<FakeHost> {
        DecorationController::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_activate_renders_each_tag() {
        let mut host = host_with("<div><p>x</p></div>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);

        assert_eq!(ctl.registry().names().collect::<Vec<_>>(), vec!["div", "p"]);
        assert_eq!(host.live.len(), 2);
        assert_eq!(
            ctl.registry().get("div").unwrap().ranges(),
            &[TextRange::new(0, 5), TextRange::new(13, 19)]
        );
    }

    #[test]
    fn test_no_active_document_is_noop() {
        let mut host = FakeHost::default();
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        ctl.handle_event(&mut host, HostEvent::DocumentChanged);
        assert!(ctl.registry().is_empty());
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_rescan_replaces_handles() {
        let mut host = host_with("<b>x</b>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        let first: Vec<_> = host.live.keys().copied().collect();

        host.document = Some(TextDocument::new("<b>x</b> <b>y</b>", "html"));
        ctl.handle_event(&mut host, HostEvent::DocumentChanged);

        // Old handle disposed, exactly one live decoration with fresh ranges
        assert_eq!(host.disposed, first);
        assert_eq!(host.live.len(), 1);
        let (_, ranges) = host.live.values().next().unwrap();
        assert_eq!(ranges.len(), 4);
    }

    #[test]
    fn test_registry_grows_monotonically() {
        let mut host = host_with("<ul></ul>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);

        host.document = Some(TextDocument::new("<ol></ol>", "html"));
        ctl.handle_event(&mut host, HostEvent::ActiveEditorChanged);

        assert_eq!(ctl.registry().names().collect::<Vec<_>>(), vec!["ul", "ol"]);
        // Tags missing from the new document render nothing
        assert!(ctl.registry().get("ul").unwrap().ranges().is_empty());
        assert_eq!(host.live.len(), 2);
    }

    #[test]
    fn test_theme_change_clears_and_recolors() {
        let mut host = host_with("<div></div>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        assert_eq!(ctl.registry().get("div").unwrap().color(), "rgb(255, 255, 200)");

        host.theme = ThemeKind::Light;
        ctl.handle_event(&mut host, HostEvent::ThemeChanged);

        assert_eq!(host.disposed.len(), 1);
        assert_eq!(host.live.len(), 1);
        let color = ctl.registry().get("div").unwrap().color().to_string();
        assert_eq!(Some(color.as_str()), ctl.palette().get("div"));
        assert_ne!(color, "rgb(255, 255, 200)");
    }

    #[test]
    fn test_theme_round_trip_restores_colors() {
        let mut host = host_with("<custom-el></custom-el>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        let dark = ctl.registry().get("custom-el").unwrap().color().to_string();

        host.theme = ThemeKind::Light;
        ctl.on_theme_changed(&mut host);
        host.theme = ThemeKind::Dark;
        ctl.on_theme_changed(&mut host);

        assert_eq!(ctl.registry().get("custom-el").unwrap().color(), dark);
    }

    #[test]
    fn test_deactivate_releases_everything() {
        let mut host = host_with("<a></a><i></i>");
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        ctl.on_deactivate(&mut host);
        assert!(host.live.is_empty());
        assert_eq!(host.disposed.len(), 2);
        assert!(ctl.registry().is_empty());
    }

    #[test]
    fn test_disabled_controller_does_nothing() {
        let mut host = host_with("<a></a>");
        let config = Config {
            enabled: false,
            ..Config::default()
        };
        let mut ctl: DecorationController<FakeHost> = DecorationController::new(&config).unwrap();
        ctl.on_activate(&mut host);
        assert!(host.live.is_empty());

        ctl.set_enabled(&mut host, true);
        assert_eq!(host.live.len(), 1);
        ctl.set_enabled(&mut host, false);
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_invalid_language_setting_falls_back() {
        let mut table = CommentTable::builtin();
        table.insert("broken", CommentSetting::pattern("(", ")"));
        assert_eq!(comment_setting_for(&table, "broken"), table.default_setting());
        assert_eq!(
            comment_setting_for(&table, "javascriptreact"),
            &CommentSetting::literal("{/*", "*/}")
        );
    }

    #[test]
    fn test_comments_respected_per_language() {
        let mut host = FakeHost {
            document: Some(TextDocument::new("{/* <Row> */}<Row>", "typescriptreact")),
            ..FakeHost::default()
        };
        let mut ctl = controller();
        ctl.on_activate(&mut host);
        assert_eq!(
            ctl.registry().get("Row").unwrap().ranges(),
            &[TextRange::new(13, 18)]
        );
    }
}
