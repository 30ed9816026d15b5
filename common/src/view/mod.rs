use api::{ACTIVE_CLASS, diagram::DiagramStyle, prefs::PreferenceSet};
use tracing::error;

use crate::{
    config::ViewSettings,
    port::{DiagramRenderer, Node, PreferenceStore, UiPort},
};

mod nav;
mod pages;
mod prefs;
mod scroll;
mod snippet;

pub use scroll::ScrollCollapse;
pub use snippet::VisibleSnippet;

// view state controller
//
// owns the ui port, the preference store and the diagram renderer, along with the bits of
// state that don't live in the document itself (search query, collapse flag).  every
// operation runs to completion on the ui thread and absorbs its own failures into the log
pub struct ViewController<P, S, R> {
    port: P,
    store: S,
    renderer: R,
    settings: ViewSettings,
    prefs: PreferenceSet,
    scroll: ScrollCollapse,
    query: String,
}

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    pub fn new(port: P, store: S, renderer: R, settings: ViewSettings) -> Self {
        let scroll = ScrollCollapse::new(&settings.scroll);
        let prefs = PreferenceSet {
            theme: settings.default_theme,
            ..Default::default()
        };

        ViewController {
            port,
            store,
            renderer,
            settings,
            prefs,
            scroll,
            query: String::new(),
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_collapsed(&self) -> bool {
        self.scroll.collapsed()
    }

    pub fn active_pages(&self) -> Vec<String> {
        self.port
            .pages()
            .into_iter()
            .filter(|page| self.port.has_class(&Node::page(page), ACTIVE_CLASS))
            .collect()
    }

    pub fn diagram_style(&self) -> DiagramStyle {
        let font = &self.settings.diagram;
        self.prefs.diagram_style(&font.font_size, &font.font_family)
    }

    // re-theme whatever diagrams are currently on screen
    fn refresh_diagrams(&mut self) {
        let style = self.diagram_style();

        for page in self.active_pages() {
            self.renderer.render(&page, &style);
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.write(key, value) {
            error!("failed to persist {key}: {err:#}");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{config::tests::sample_site, document::SiteDocument, store::MemoryStore};

    #[derive(Debug, Default)]
    pub(crate) struct RecordingRenderer {
        pub(crate) calls: Vec<(String, DiagramStyle)>,
    }

    impl DiagramRenderer for RecordingRenderer {
        fn render(&mut self, page: &str, style: &DiagramStyle) {
            self.calls.push((page.to_owned(), style.clone()));
        }
    }

    pub(crate) type TestController = ViewController<SiteDocument, MemoryStore, RecordingRenderer>;

    pub(crate) fn controller_with(store: MemoryStore) -> TestController {
        let site = sample_site();

        ViewController::new(
            SiteDocument::from_config(&site),
            store,
            RecordingRenderer::default(),
            site.view.clone(),
        )
    }

    pub(crate) fn controller() -> TestController {
        controller_with(MemoryStore::new())
    }

    #[test]
    fn starts_on_home_with_default_theme() {
        let controller = controller();

        assert_eq!(controller.active_pages(), vec!["home"]);
        assert_eq!(controller.preferences(), &PreferenceSet::default());
        assert!(!controller.is_collapsed());
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn diagram_style_uses_configured_font() {
        let controller = controller();
        let style = controller.diagram_style();

        assert_eq!(style.theme_variables.font_size, "22px");
        assert_eq!(style.theme_variables.font_family, "Segoe UI, sans-serif");
    }
}
