pub mod smtp;
pub mod textbelt;

pub use smtp::SmtpMailer;
pub use textbelt::TextbeltClient;
