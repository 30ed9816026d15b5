use api::{HIDE_ON_SCROLL_CLASS, SHRINK_CLASS};
use tracing::debug;

use super::ViewController;
use crate::{
    config::ScrollThresholds,
    port::{DiagramRenderer, Node, PreferenceStore, UiPort},
};

// two-state header collapse
//
// the thresholds may be equal, in which case an offset sitting exactly on them changes nothing
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollCollapse {
    collapsed: bool,
    collapse_above: f64,
    expand_below: f64,
}

impl ScrollCollapse {
    pub fn new(thresholds: &ScrollThresholds) -> Self {
        ScrollCollapse {
            collapsed: false,
            collapse_above: thresholds.collapse_above,
            expand_below: thresholds.expand_below,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    // feed a scroll offset, getting back the new state only when it changed
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        if !self.collapsed && offset > self.collapse_above {
            self.collapsed = true;
            Some(true)
        } else if self.collapsed && offset < self.expand_below {
            self.collapsed = false;
            Some(false)
        } else {
            None
        }
    }
}

impl<P, S, R> ViewController<P, S, R>
where
    P: UiPort,
    S: PreferenceStore,
    R: DiagramRenderer,
{
    pub fn on_scroll(&mut self, offset: f64) {
        let Some(collapsed) = self.scroll.update(offset) else {
            return;
        };

        debug!({ offset = offset }, "header collapsed: {collapsed}");

        // the banner and toolbar are optional in the markup, missing ones are skipped
        self.port.set_class(&Node::Banner, SHRINK_CLASS, collapsed);
        self.port.set_class(&Node::Header, SHRINK_CLASS, collapsed);
        self.port.set_class(&Node::Toolbar, HIDE_ON_SCROLL_CLASS, collapsed);
    }
}

#[cfg(test)]
mod tests {
    use api::{HIDE_ON_SCROLL_CLASS, SHRINK_CLASS};

    use super::*;
    use crate::view::tests::controller;

    #[test]
    fn collapses_past_threshold_and_expands_at_top() {
        let mut scroll = ScrollCollapse::new(&ScrollThresholds::default());

        assert_eq!(scroll.update(0.0), None);
        assert_eq!(scroll.update(1.0), None);
        assert_eq!(scroll.update(1.5), Some(true));
        assert_eq!(scroll.update(400.0), None);
        assert_eq!(scroll.update(1.0), None);
        assert_eq!(scroll.update(0.0), Some(false));
        assert_eq!(scroll.update(0.0), None);
    }

    #[test]
    fn wide_band_holds_state_in_between() {
        let mut scroll = ScrollCollapse::new(&ScrollThresholds {
            collapse_above: 30.0,
            expand_below: 10.0,
        });

        assert_eq!(scroll.update(20.0), None);
        assert_eq!(scroll.update(31.0), Some(true));
        assert_eq!(scroll.update(20.0), None);
        assert!(scroll.collapsed());
        assert_eq!(scroll.update(9.0), Some(false));
    }

    #[test]
    fn nan_offsets_are_ignored() {
        let mut scroll = ScrollCollapse::new(&ScrollThresholds::default());
        assert_eq!(scroll.update(f64::NAN), None);
    }

    #[test]
    fn controller_drives_header_classes() {
        let mut controller = controller();

        controller.on_scroll(50.0);
        assert!(controller.is_collapsed());
        assert!(controller.port().has_class(&Node::Banner, SHRINK_CLASS));
        assert!(controller.port().has_class(&Node::Header, SHRINK_CLASS));
        assert!(controller.port().has_class(&Node::Toolbar, HIDE_ON_SCROLL_CLASS));

        controller.on_scroll(0.0);
        assert!(!controller.is_collapsed());
        assert!(controller.port().classes(&Node::Banner).is_empty());
        assert!(controller.port().classes(&Node::Toolbar).is_empty());
    }
}
