//! Bot identity configuration injected by the host page.
//!
//! The host embeds a JSON `<script>` block before the client mounts;
//! components receive the parsed value through context instead of reading
//! a page-level global. Absent or malformed config degrades to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(feature = "hydrate")]
const CONFIG_ELEMENT_ID: &str = "mini-admin-config";

/// Bot identity fields used for user-facing document titles.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotConfig {
    pub bot_name: String,
    pub bot_first_name: String,
}

impl BotConfig {
    /// Display name shown in user-facing titles.
    ///
    /// Falls back to the first name when the full bot name is empty. An
    /// empty string counts as unset.
    pub fn display_name(&self) -> &str {
        if self.bot_name.is_empty() {
            &self.bot_first_name
        } else {
            &self.bot_name
        }
    }

    /// Read the config JSON the host page embedded in the document.
    ///
    /// Returns defaults on the server, when the element is missing, or
    /// when its content fails to parse.
    pub fn from_host_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content())
                .and_then(|text| serde_json::from_str(&text).ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
