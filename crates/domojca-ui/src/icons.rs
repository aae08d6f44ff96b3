//! Inline SVG glyphs.

use domojca_core::content::MinistryIcon;

/// Every glyph the site draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Heart,
    Flame,
    Users,
    HandHeart,
    Sun,
    Moon,
    MessageCircle,
    Send,
    Close,
    MapPin,
    Clock,
    Calendar,
    Mail,
    Play,
    Copy,
}

impl From<MinistryIcon> for Icon {
    fn from(icon: MinistryIcon) -> Self {
        match icon {
            MinistryIcon::Heart => Icon::Heart,
            MinistryIcon::Flame => Icon::Flame,
            MinistryIcon::Users => Icon::Users,
            MinistryIcon::HandHeart => Icon::HandHeart,
        }
    }
}

/// Markup for `icon`, sized by the surrounding font.
pub fn icon_svg(icon: Icon) -> String {
    format!(
        r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
        icon_paths(icon)
    )
}

fn icon_paths(icon: Icon) -> &'static str {
    match icon {
        Icon::Heart => r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#,
        Icon::Flame => r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.07-2.14-.22-4.05 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.15.43-2.29 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
        Icon::Users => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        Icon::HandHeart => r#"<path d="M11 14h2a2 2 0 1 0 0-4h-3c-.6 0-1.1.2-1.4.6L3 16"/><path d="m7 20 1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 0 0-2.75-2.91l-4.2 3.9"/><path d="m2 15 6 6"/><path d="M19.5 8.5c.7-.7 1.5-1.6 1.5-2.7A2.73 2.73 0 0 0 16 4a2.78 2.78 0 0 0-5 1.8c0 1.2.8 2 1.5 2.8L16 12Z"/>"#,
        Icon::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        Icon::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        Icon::MessageCircle => r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#,
        Icon::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
        Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Icon::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
        Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
        Icon::Calendar => r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
        Icon::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        Icon::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
        Icon::Copy => r#"<rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ministry_icon_has_a_glyph() {
        for icon in [
            MinistryIcon::Heart,
            MinistryIcon::Flame,
            MinistryIcon::Users,
            MinistryIcon::HandHeart,
        ] {
            let svg = icon_svg(icon.into());
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
        }
    }

    #[test]
    fn test_ministry_icon_mapping() {
        assert_eq!(Icon::from(MinistryIcon::HandHeart), Icon::HandHeart);
        assert_eq!(Icon::from(MinistryIcon::Flame), Icon::Flame);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        assert_ne!(icon_svg(Icon::Sun), icon_svg(Icon::Moon));
    }
}
