use anyhow::Result;
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use crate::Controller;

async fn write_clipboard(text: &str) -> Result<()> {
    let mut eval = document::eval(
        r#"
        const text = await dioxus.recv();
        await navigator.clipboard.writeText(text);
        return true;
        "#,
    );

    eval.send(text.to_owned())
        .map_err(|err| anyhow::Error::msg(format!("failed to send snippet: {err}")))?;

    eval.join::<bool>()
        .await
        .map_err(|err| anyhow::Error::msg(format!("clipboard write failed: {err}")))?;

    Ok(())
}

// copy the visible page's snippet and flash the button label
pub async fn copy_visible_snippet(mut controller: Signal<Controller>) {
    let Some(snippet) = controller.read().visible_snippet() else {
        debug!("no visible snippet to copy");
        return;
    };

    let written = write_clipboard(&snippet.text).await;

    let Some(revert_ms) = controller.write().finish_copy(&snippet.page, written) else {
        return;
    };

    let task = Timeout::new(revert_ms, move || {
        controller.write().reset_copy_label(&snippet.page);
    });
    task.forget();
}
