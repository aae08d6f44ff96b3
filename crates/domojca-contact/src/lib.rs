//! Contact form for Dom Ojca.
//!
//! Field validation, the form state machine and the EmailJS delivery
//! backend behind the [`DeliveryClient`] trait.

pub mod delivery;
pub mod emailjs;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;

pub use delivery::DeliveryClient;
pub use emailjs::EmailJsClient;
pub use error::{ContactError, DeliveryError, Field, ValidationError};
pub use form::{validate_transition, ContactForm};
pub use types::{ContactCommand, ContactSnapshot, ContactStatus, ContactSubmission};
pub use validation::validate;
