//! Page Configuration
//!
//! Reads the client config from a JSON `<script id="phonebook-config">`
//! element in the host page, falling back to defaults.

use phonebook_core::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "phonebook-config";

/// Config embedded in the current document
pub fn page_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(text) => parse_config(&text),
        None => ClientConfig::default(),
    }
}

fn parse_config(text: &str) -> ClientConfig {
    if text.trim().is_empty() {
        return ClientConfig::default();
    }
    match ClientConfig::from_json(text) {
        Ok(config) => {
            log::info!("using record store at {}", config.collection_url());
            config
        }
        Err(e) => {
            log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_element_uses_defaults() {
        assert_eq!(parse_config("  \n "), ClientConfig::default());
    }

    #[test]
    fn test_malformed_element_uses_defaults() {
        assert_eq!(parse_config("{baseUrl:"), ClientConfig::default());
    }

    #[test]
    fn test_override_base_url() {
        let config = parse_config(r#"{ "baseUrl": "https://phonebook.example.org/api", "notificationTtlMs": 3000 }"#);
        assert_eq!(config.collection_url(), "https://phonebook.example.org/api/persons");
        assert_eq!(config.notification_ttl_ms, 3000);
    }
}
