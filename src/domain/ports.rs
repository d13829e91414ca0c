use async_trait::async_trait;

use crate::utils::error::SendError;

#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), SendError>;
}

#[async_trait]
pub trait SmsTransport: Send + Sync {
    async fn send(&self, phone: &str, message: &str) -> Result<(), SendError>;
}
