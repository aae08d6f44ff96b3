//! Stylesheet and script embedded at compile time.
//!
//! Both files live under `assets/` and are served as-is; there is no build
//! step and no external CDN.

/// Site stylesheet, light and dark palettes included.
pub const SITE_CSS: &str = include_str!("../assets/site.css");

/// Client script: theme toggle, copy-to-clipboard, contact form and chat widget.
pub const SITE_JS: &str = include_str!("../assets/site.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_css_has_both_themes() {
        assert!(SITE_CSS.contains(":root"));
        assert!(SITE_CSS.contains("html.dark"));
    }

    #[test]
    fn site_js_talks_to_the_api() {
        assert!(SITE_JS.contains("/api/chat/sessions"));
        assert!(SITE_JS.contains("/api/contact"));
        assert!(SITE_JS.contains("/api/theme/toggle"));
    }

    #[test]
    fn site_js_renders_chat_text_safely() {
        assert!(SITE_JS.contains("textContent = msg.text"));
        assert!(!SITE_JS.contains("innerHTML = msg"));
    }
}
