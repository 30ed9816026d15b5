pub mod clipboard;
pub mod diagram;
pub mod storage;
pub mod style;

use tracing::error;

pub const POPUP_TARGET: &str = "popupWindow";
pub const POPUP_FEATURES: &str = "width=auto,height=auto,scrollbars=yes";

// open an external link in the shared popup window
pub fn open_popup(url: &str) {
    let Some(window) = web_sys::window() else {
        error!("no global window exists, cannot open {url}");
        return;
    };

    if let Err(err) =
        window.open_with_url_and_target_and_features(url, POPUP_TARGET, POPUP_FEATURES)
    {
        error!("failed to open popup for {url}: {err:?}");
    }
}
