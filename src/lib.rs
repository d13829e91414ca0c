pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{SmtpMailer, TextbeltClient};
pub use crate::config::{CliArgs, ConfigDefaults};
pub use crate::core::dispatch::Dispatcher;
pub use crate::core::method::{select_method, DEFAULT_METHOD};
pub use crate::core::request::{Field, RequestBuilder};
pub use crate::domain::model::{
    Channel, DeliveryStatus, DispatchMethod, DispatchOutcome, ReminderRequest,
};
pub use crate::utils::error::{ReminderError, Result, SendError};
