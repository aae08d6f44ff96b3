use async_trait::async_trait;

use crate::error::DeliveryError;
use crate::types::ContactSubmission;

/// A service that delivers contact messages to the church office.
///
/// Failures are returned to the caller, which decides what the visitor sees.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), DeliveryError>;
}
