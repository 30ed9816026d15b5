use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use ::common::port::PreferenceStore;

// preference store backed by the browser's local storage
//
// values are written raw rather than through gloo's json encoding, so that the keys stay
// compatible with what the static site already stored ("blue", not "\"blue\"")
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
