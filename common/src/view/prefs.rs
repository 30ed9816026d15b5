use api::{
    DARK_LABEL, DARK_MODE_CLASS, DARK_MODE_KEY, LIGHT_LABEL, TEXT_SIZE_KEY, THEME_CLASS_PREFIX,
    THEME_KEY,
    prefs::{TextScale, Theme},
};
use tracing::{Level, debug, info, instrument, warn};

use super::ViewController;
use crate::port::{DiagramRenderer, Node, PreferenceStore, UiPort};

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply_theme(theme);
        self.persist(THEME_KEY, theme.name());
        self.refresh_diagrams();
    }

    // returns the new dark mode flag
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn toggle_dark_mode(&mut self) -> bool {
        let dark = !self.port.has_class(&Node::Body, DARK_MODE_CLASS);

        self.apply_dark_mode(dark);
        self.persist(DARK_MODE_KEY, if dark { "true" } else { "false" });
        self.refresh_diagrams();

        dark
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn set_text_scale(&mut self, scale: TextScale) {
        self.apply_text_scale(scale);
        self.persist(TEXT_SIZE_KEY, scale.css_class());
    }

    // re-apply whatever the last session left behind
    //
    // garbage in the store is treated the same as nothing in the store; for the theme that
    // means falling back to the default and writing it back, so the next load is clean
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn restore(&mut self) {
        let fallback = self.settings.default_theme;

        let theme = match self.store.read(THEME_KEY) {
            Some(name) => match name.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    warn!("ignoring persisted theme: {err}");
                    None
                }
            },
            None => None,
        };

        let theme = match theme {
            Some(theme) => theme,
            None => {
                self.persist(THEME_KEY, fallback.name());
                fallback
            }
        };

        self.apply_theme(theme);

        let dark = self.store.read(DARK_MODE_KEY).as_deref() == Some("true");
        self.apply_dark_mode(dark);

        if let Some(class) = self.store.read(TEXT_SIZE_KEY) {
            match class.parse::<TextScale>() {
                Ok(scale) => self.apply_text_scale(scale),
                Err(err) => warn!("ignoring persisted text size: {err}"),
            }
        }

        info!({ prefs = ?self.prefs }, "restored preferences");
    }

    fn apply_theme(&mut self, theme: Theme) {
        for class in self.port.classes(&Node::Body) {
            if class.starts_with(THEME_CLASS_PREFIX) {
                self.port.set_class(&Node::Body, &class, false);
            }
        }

        self.port.set_class(&Node::Body, &theme.css_class(), true);
        self.port.set_label(&Node::ThemeSelector, theme.name());

        self.prefs.theme = theme;
    }

    fn apply_dark_mode(&mut self, dark: bool) {
        self.port.set_class(&Node::Body, DARK_MODE_CLASS, dark);
        self.port
            .set_label(&Node::DarkToggle, if dark { DARK_LABEL } else { LIGHT_LABEL });

        self.prefs.dark_mode = dark;
    }

    fn apply_text_scale(&mut self, scale: TextScale) {
        for other in TextScale::all() {
            self.port.set_class(&Node::Body, other.css_class(), false);
        }

        self.port.set_class(&Node::Body, scale.css_class(), true);
        debug!("text scale now {scale}");

        self.prefs.text_scale = Some(scale);
    }
}
