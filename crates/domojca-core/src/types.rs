use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomOjcaError;

// =============================================================================
// Language
// =============================================================================

/// The closed set of languages the site is published in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Polish (site default).
    #[default]
    Pl,
    /// Belarusian.
    Be,
    /// Ukrainian. The site uses the code `ua`, not ISO `uk`.
    Ua,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 5] = [
        Language::Pl,
        Language::Be,
        Language::Ua,
        Language::Ru,
        Language::En,
    ];

    /// The two-letter code used in URLs and cookies.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::Be => "be",
            Language::Ua => "ua",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// English name, used when asking the assistant to reply in this language.
    pub fn english_name(self) -> &'static str {
        match self {
            Language::Pl => "Polish",
            Language::Be => "Belarusian",
            Language::Ua => "Ukrainian",
            Language::Ru => "Russian",
            Language::En => "English",
        }
    }

    /// Short label shown in the language selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::Pl => "PL",
            Language::Be => "BY",
            Language::Ua => "UA",
            Language::Ru => "RU",
            Language::En => "EN",
        }
    }

    /// Value for the HTML `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Ua => "uk",
            other => other.code(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomOjcaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "be" => Ok(Language::Be),
            "ua" => Ok(Language::Ua),
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(DomOjcaError::UnknownLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// PageView
// =============================================================================

/// Top-level pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageView {
    #[default]
    Home,
    About,
    Sermons,
    Events,
    Contact,
    Donation,
}

impl PageView {
    /// Pages in navigation order.
    pub const ALL: [PageView; 6] = [
        PageView::Home,
        PageView::About,
        PageView::Sermons,
        PageView::Events,
        PageView::Contact,
        PageView::Donation,
    ];

    /// URL slug (`""` for the home page).
    pub fn slug(self) -> &'static str {
        match self {
            PageView::Home => "",
            PageView::About => "about",
            PageView::Sermons => "sermons",
            PageView::Events => "events",
            PageView::Contact => "contact",
            PageView::Donation => "donation",
        }
    }

    /// Absolute path of the page.
    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }
}

impl FromStr for PageView {
    type Err = DomOjcaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_matches('/') {
            "" | "home" => Ok(PageView::Home),
            "about" => Ok(PageView::About),
            "sermons" => Ok(PageView::Sermons),
            "events" => Ok(PageView::Events),
            "contact" => Ok(PageView::Contact),
            "donation" => Ok(PageView::Donation),
            other => Err(DomOjcaError::UnknownPage(other.to_string())),
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Colour theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a persisted preference. Anything other than `light`/`dark` is ignored.
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Initial theme: the persisted preference wins, then the OS default.
    pub fn resolve(persisted: Option<&str>, os_prefers_dark: bool) -> Theme {
        match persisted.and_then(Theme::parse) {
            Some(theme) => theme,
            None if os_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Language ----

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" ua ".parse::<Language>().unwrap(), Language::Ua);
    }

    #[test]
    fn test_language_parse_unknown() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(matches!(err, DomOjcaError::UnknownLanguage(ref c) if c == "de"));
    }

    #[test]
    fn test_language_default_is_polish() {
        assert_eq!(Language::default(), Language::Pl);
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Ua).unwrap();
        assert_eq!(json, "\"ua\"");
        let lang: Language = serde_json::from_str("\"be\"").unwrap();
        assert_eq!(lang, Language::Be);
    }

    #[test]
    fn test_language_html_lang_maps_ukrainian() {
        assert_eq!(Language::Ua.html_lang(), "uk");
        assert_eq!(Language::Pl.html_lang(), "pl");
    }

    // ---- PageView ----

    #[test]
    fn test_page_view_slugs_round_trip() {
        for page in PageView::ALL {
            assert_eq!(page.slug().parse::<PageView>().unwrap(), page);
        }
    }

    #[test]
    fn test_page_view_unknown() {
        assert!(matches!(
            "blog".parse::<PageView>(),
            Err(DomOjcaError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_page_view_path() {
        assert_eq!(PageView::Home.path(), "/");
        assert_eq!(PageView::Donation.path(), "/donation");
    }

    // ---- Theme ----

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_resolve_prefers_persisted_value() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_theme_resolve_falls_back_to_os_default() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("purple"), true), Theme::Dark);
    }
}
