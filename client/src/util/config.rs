//! Editor configuration loading.
//!
//! The page may embed a `<script type="application/json" id="playbook-config">`
//! block with overrides for any [`EditorConfig`] field. Anything missing or
//! malformed falls back to the defaults so the editor always starts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::config::EditorConfig;

/// DOM id of the optional config block.
pub const CONFIG_ELEMENT_ID: &str = "playbook-config";

/// Parse the raw text of the config block.
pub fn parse_config(raw: Option<&str>) -> EditorConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        log::debug!("no {CONFIG_ELEMENT_ID} block, using defaults");
        return EditorConfig::default();
    };
    match EditorConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_ELEMENT_ID}: {err}");
            EditorConfig::default()
        }
    }
}

/// Read the config block from the current document.
pub fn load_editor_config() -> EditorConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse_config(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        EditorConfig::default()
    }
}
