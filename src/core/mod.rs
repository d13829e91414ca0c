pub mod dispatch;
pub mod method;
pub mod request;

pub use crate::domain::model::{DispatchMethod, DispatchOutcome, ReminderRequest};
pub use crate::domain::ports::{EmailTransport, SmsTransport};
pub use crate::utils::error::Result;
