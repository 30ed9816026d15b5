use dioxus::prelude::*;
use tracing::{debug, error, warn};

use ::common::port::DiagramRenderer;
use api::diagram::DiagramStyle;

// hands the style object and a page's diagram nodes to mermaid
//
// the page only becomes visible on the next render, so the actual call is deferred a tick.
// the outcome comes back over the eval channel and lands in the log
#[derive(Clone, Copy, Debug, Default)]
pub struct MermaidRenderer;

impl DiagramRenderer for MermaidRenderer {
    fn render(&mut self, page: &str, style: &DiagramStyle) {
        let encoded = serde_json::to_string(page).and_then(|page_json| {
            serde_json::to_string(style).map(|style_json| (page_json, style_json))
        });

        let (page_json, style_json) = match encoded {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("failed to encode diagram request for {page}: {err}");
                return;
            }
        };

        debug!("rendering diagrams on {page}");

        let script = format!(
            r#"
            await new Promise((resolve) => setTimeout(resolve, 0));
            const page = document.getElementById({page_json});
            if (!window.mermaid || !page) return false;
            mermaid.initialize({style_json});
            await mermaid.run({{ nodes: page.querySelectorAll(".mermaid") }});
            return true;
            "#
        );

        let eval = document::eval(&script);
        let page = page.to_owned();

        spawn(async move {
            match eval.join::<bool>().await {
                Ok(true) => debug!("rendered diagrams on {page}"),
                Ok(false) => debug!("diagram library not loaded, skipped {page}"),
                Err(err) => warn!("diagram render failed on {page}: {err}"),
            }
        });
    }
}
