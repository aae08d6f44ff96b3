//! Page layout: document shell, navigation, footer and chat widget.

use domojca_core::content::{service_times, ADDRESS_LINES};
use domojca_core::{translations, Language, PageView, Theme, Translations};

use crate::icons::{icon_svg, Icon};
use crate::pages;

/// Everything a page render depends on. Passed explicitly; there is no
/// ambient language or theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewContext {
    pub page: PageView,
    pub language: Language,
    pub theme: Theme,
}

impl ViewContext {
    pub fn new(page: PageView, language: Language, theme: Theme) -> Self {
        Self {
            page,
            language,
            theme,
        }
    }

    pub fn text(&self) -> &'static Translations {
        translations(self.language)
    }

    /// Link to `page` keeping the current language.
    pub fn href(&self, page: PageView) -> String {
        format!("{}?lang={}", page.path(), self.language.code())
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page_title(ctx: &ViewContext) -> &'static str {
    let nav = &ctx.text().nav;
    match ctx.page {
        PageView::Home => nav.home,
        PageView::About => nav.about,
        PageView::Sermons => nav.sermons,
        PageView::Events => nav.events,
        PageView::Contact => nav.contact,
        PageView::Donation => nav.donation,
    }
}

/// Render the full HTML document for `ctx.page`.
pub fn render_page(ctx: &ViewContext) -> String {
    let body = match ctx.page {
        PageView::Home => pages::home(ctx),
        PageView::About => pages::about(ctx),
        PageView::Sermons => pages::sermons(ctx),
        PageView::Events => pages::events(ctx),
        PageView::Contact => pages::contact(ctx),
        PageView::Donation => pages::donation(ctx),
    };

    let html_class = match ctx.theme {
        Theme::Dark => " class=\"dark\"",
        Theme::Light => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" data-theme="{theme}"{html_class}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Dom Ojca</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body data-lang="{code}">
{nav}
<main>
{body}
</main>
{footer}
{chat}
<script src="/assets/site.js" defer></script>
</body>
</html>
"#,
        lang = ctx.language.html_lang(),
        theme = ctx.theme.as_str(),
        html_class = html_class,
        title = escape_html(page_title(ctx)),
        code = ctx.language.code(),
        nav = render_nav(ctx),
        body = body,
        footer = render_footer(ctx),
        chat = render_chat_widget(ctx),
    )
}

fn render_nav(ctx: &ViewContext) -> String {
    let nav = &ctx.text().nav;

    let links: String = PageView::ALL
        .iter()
        .map(|&page| {
            let label = match page {
                PageView::Home => nav.home,
                PageView::About => nav.about,
                PageView::Sermons => nav.sermons,
                PageView::Events => nav.events,
                PageView::Contact => nav.contact,
                PageView::Donation => nav.donation,
            };
            let active = if page == ctx.page { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                ctx.href(page),
                active,
                escape_html(label)
            )
        })
        .collect();

    let languages: String = Language::ALL
        .iter()
        .map(|&lang| {
            let active = if lang == ctx.language { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}?lang={}" hreflang="{}"{}>{}</a>"#,
                ctx.page.path(),
                lang.code(),
                lang.html_lang(),
                active,
                lang.label()
            )
        })
        .collect();

    let theme_icon = match ctx.theme {
        Theme::Light => Icon::Moon,
        Theme::Dark => Icon::Sun,
    };

    format!(
        r#"<header class="site-nav"><div class="container">
<a class="brand" href="{home}">Dom <span>Ojca</span></a>
<nav class="nav-links">{links}</nav>
<div class="lang-select">{languages}</div>
<button class="theme-toggle" type="button" data-theme-toggle title="{toggle}" aria-label="{toggle}">{icon}</button>
</div></header>"#,
        home = ctx.href(PageView::Home),
        links = links,
        languages = languages,
        toggle = escape_html(nav.theme_toggle),
        icon = icon_svg(theme_icon),
    )
}

fn render_footer(ctx: &ViewContext) -> String {
    let footer = &ctx.text().footer;
    let times: String = service_times(ctx.language)
        .iter()
        .map(|t| {
            format!(
                "<div>{} {} - {}</div>",
                escape_html(&t.day),
                escape_html(&t.time),
                escape_html(&t.description)
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer"><div class="container">
<div><strong>Dom Ojca</strong><div>{tagline}</div></div>
<div><strong>{address_title}</strong><div>{street}</div><div>{city}</div></div>
<div>{times}</div>
<div>&copy; Dom Ojca. {rights}</div>
</div></footer>"#,
        tagline = escape_html(footer.tagline),
        address_title = escape_html(footer.address_title),
        street = escape_html(ADDRESS_LINES[0]),
        city = escape_html(ADDRESS_LINES[1]),
        times = times,
        rights = escape_html(footer.rights),
    )
}

fn render_chat_widget(ctx: &ViewContext) -> String {
    let chat = &ctx.text().chat;
    format!(
        r#"<button class="button chat-launcher" type="button" data-chat-launcher>{icon} {launcher}</button>
<div class="chat-panel" id="chat-panel" hidden>
<div class="chat-header"><div><strong>{title}</strong><small>{status}</small></div><button class="chat-close" type="button" aria-label="close">{close}</button></div>
<div class="chat-messages" aria-live="polite"></div>
<div class="chat-input"><input type="text" placeholder="{placeholder}" maxlength="2000"><button class="button" type="button" aria-label="send">{send}</button></div>
</div>"#,
        icon = icon_svg(Icon::MessageCircle),
        launcher = escape_html(chat.launcher),
        title = escape_html(chat.title),
        status = escape_html(chat.status_online),
        close = icon_svg(Icon::Close),
        placeholder = escape_html(chat.placeholder),
        send = icon_svg(Icon::Send),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(page: PageView, language: Language) -> ViewContext {
        ViewContext::new(page, language, Theme::Light)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("Sołtysowicka"), "Sołtysowicka");
    }

    #[test]
    fn test_every_page_renders_a_document() {
        for page in PageView::ALL {
            for lang in Language::ALL {
                let html = render_page(&ctx(page, lang));
                assert!(html.starts_with("<!DOCTYPE html>"), "{:?} {}", page, lang);
                assert!(html.contains("</html>"));
                assert!(html.contains("/assets/site.js"));
                assert!(html.contains("id=\"chat-panel\""));
            }
        }
    }

    #[test]
    fn test_html_lang_and_theme() {
        let html = render_page(&ViewContext::new(PageView::Home, Language::Ua, Theme::Dark));
        assert!(html.contains(r#"<html lang="uk" data-theme="dark" class="dark">"#));
        assert!(html.contains(r#"data-lang="ua""#));

        let html = render_page(&ctx(PageView::Home, Language::En));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
    }

    #[test]
    fn test_navigation_marks_active_page_and_keeps_language() {
        let html = render_page(&ctx(PageView::Events, Language::En));
        assert!(html.contains(r#"<a href="/events?lang=en" class="active">Events</a>"#));
        assert!(html.contains(r#"<a href="/about?lang=en">About</a>"#));
    }

    #[test]
    fn test_language_selector_links_to_current_page() {
        let html = render_page(&ctx(PageView::Donation, Language::Pl));
        assert!(html.contains(r#"href="/donation?lang=be" hreflang="be">BY</a>"#));
        assert!(html.contains(r#"href="/donation?lang=pl" hreflang="pl" class="active">PL</a>"#));
    }

    #[test]
    fn test_chat_widget_is_localized() {
        let html = render_page(&ctx(PageView::Home, Language::Pl));
        assert!(html.contains("Zapytaj asystenta"));
        assert!(html.contains(r#"placeholder="Zadaj pytanie...""#));
        assert!(html.contains("Asystent Domu Ojca"));
    }

    #[test]
    fn test_footer_has_address_and_service_times() {
        let html = render_page(&ctx(PageView::About, Language::En));
        assert!(html.contains("ul. Sołtysowicka 62A"));
        assert!(html.contains("51-168 Wrocław"));
        assert!(html.contains("Sunday 11:00"));
    }
}
