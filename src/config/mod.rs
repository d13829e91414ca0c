pub mod json_defaults;

use clap::Parser;

use crate::domain::model::DispatchMethod;

pub use json_defaults::ConfigDefaults;

/// Default path of the JSON defaults file when `JSON_PATH` is not set.
pub const DEFAULT_JSON_PATH: &str = "reminder.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "small-reminder")]
#[command(
    about = "Sends a text or email reminder to target recipients, falling back to JSON defaults"
)]
pub struct CliArgs {
    /// A list of recipients
    #[arg(long, num_args = 1..)]
    pub recipients: Vec<String>,

    /// A list of 10 digit phone numbers formatted 5555555555
    #[arg(long, num_args = 1..)]
    pub phones: Vec<String>,

    /// Message body to be sent
    #[arg(long)]
    pub message: Option<String>,

    /// Subject line for email
    #[arg(long)]
    pub subject: Option<String>,

    /// A file to read from (reserved, not used by the dispatch core)
    #[arg(long)]
    pub file: Option<String>,

    /// How is the reminder being sent? Email, text or both?
    #[arg(long, value_enum)]
    pub method: Option<DispatchMethod>,

    /// Send texts against the billed gateway key instead of the free test key
    #[arg(long)]
    pub live: bool,

    /// Path of the append-mode log file
    #[arg(long, default_value = "reminder.log")]
    pub log_file: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variadic_recipient_flags() {
        let args = CliArgs::parse_from([
            "small-reminder",
            "--recipients",
            "a@example.com",
            "b@example.com",
            "--phones",
            "5551234567",
            "--subject",
            "Custom",
        ]);

        assert_eq!(args.recipients, vec!["a@example.com", "b@example.com"]);
        assert_eq!(args.phones, vec!["5551234567"]);
        assert_eq!(args.subject.as_deref(), Some("Custom"));
        assert_eq!(args.message, None);
        assert!(!args.live);
    }

    #[test]
    fn test_method_flag_values() {
        let args = CliArgs::parse_from(["small-reminder", "--method", "both"]);
        assert_eq!(args.method, Some(DispatchMethod::Both));

        let args = CliArgs::parse_from(["small-reminder", "--method", "email"]);
        assert_eq!(args.method, Some(DispatchMethod::Email));

        assert!(CliArgs::try_parse_from(["small-reminder", "--method", "fax"]).is_err());
    }
}
