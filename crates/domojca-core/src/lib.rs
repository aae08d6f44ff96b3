pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod types;

pub use config::DomOjcaConfig;
pub use error::{DomOjcaError, Result};
pub use i18n::{translations, Translations};
pub use types::*;
