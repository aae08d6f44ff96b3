//! Server-rendered views for the Dom Ojca site.
//!
//! Pages are rendered from a [`ViewContext`] (page, language, theme) into a
//! complete HTML document. The stylesheet and client script are embedded at
//! compile time via `include_str!`, so the binary has no runtime file
//! dependencies.
//!
//! # Modules
//!
//! - [`view`]: document layout, navigation, footer, chat widget shell
//! - [`pages`]: the body of each page
//! - [`icons`]: inline SVG glyphs
//! - [`assets`]: embedded `site.css` and `site.js`

pub mod assets;
pub mod icons;
pub mod pages;
pub mod view;

pub use assets::{SITE_CSS, SITE_JS};
pub use icons::{icon_svg, Icon};
pub use view::{escape_html, render_page, ViewContext};
