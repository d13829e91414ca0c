use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::DispatchMethod;
use crate::utils::error::{ReminderError, Result};

/// Defaults loaded once from the JSON file and read-only for the run.
/// Every key is optional at parse time; whether a missing key is fatal is
/// decided at resolution, where the CLI side is also known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDefaults {
    #[serde(default)]
    pub recipients: Option<Vec<String>>,
    #[serde(default)]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default)]
    pub subjects: Option<TextDefaults>,
    #[serde(default)]
    pub messages: Option<TextDefaults>,
    #[serde(default)]
    pub method: Option<DispatchMethod>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub days: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDefaults {
    #[serde(default)]
    pub default: Option<String>,
}

impl ConfigDefaults {
    /// 從 JSON 檔案載入預設值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ReminderError::ConfigFileError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::from_json_str(&content).map_err(|e| ReminderError::ConfigFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 從 JSON 字串解析預設值
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn default_recipients(&self) -> Option<&[String]> {
        self.recipients.as_deref()
    }

    pub fn default_phones(&self) -> Option<&[String]> {
        self.phone_numbers.as_deref()
    }

    /// The `subjects.default` entry. An empty string counts as absent.
    pub fn default_subject(&self) -> Option<&str> {
        non_empty_entry(&self.subjects)
    }

    /// The `messages.default` entry. An empty string counts as absent.
    pub fn default_message(&self) -> Option<&str> {
        non_empty_entry(&self.messages)
    }

    pub fn default_method(&self) -> Option<DispatchMethod> {
        self.method
    }

    /// The `time` placeholder parsed as HH:MM:AM. Logged at startup,
    /// never used for scheduling.
    pub fn schedule_time(&self) -> Option<NaiveTime> {
        let raw = self.time.as_deref()?;
        match NaiveTime::parse_from_str(raw, "%I:%M:%p") {
            Ok(time) => Some(time),
            Err(e) => {
                tracing::warn!("ignoring unparseable time placeholder {raw:?}: {e}");
                None
            }
        }
    }

    /// The `days` placeholder. Logged at startup, never used for
    /// scheduling.
    pub fn schedule_days(&self) -> &[String] {
        self.days.as_deref().unwrap_or_default()
    }
}

fn non_empty_entry(section: &Option<TextDefaults>) -> Option<&str> {
    section
        .as_ref()
        .and_then(|t| t.default.as_deref())
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"{
        "recipients": ["a@example.com", "b@example.com"],
        "phone_numbers": ["5551234567"],
        "subjects": {"default": "Reminder"},
        "messages": {"default": "Log your hours"},
        "time": "09:30:AM",
        "days": ["M", "T", "W", "TH", "F"]
    }"#;

    #[test]
    fn test_parse_full_config() {
        let defaults = ConfigDefaults::from_json_str(FULL_CONFIG).unwrap();

        assert_eq!(
            defaults.default_recipients().unwrap(),
            ["a@example.com", "b@example.com"]
        );
        assert_eq!(defaults.default_phones().unwrap(), ["5551234567"]);
        assert_eq!(defaults.default_subject(), Some("Reminder"));
        assert_eq!(defaults.default_message(), Some("Log your hours"));
        assert_eq!(defaults.default_method(), None);
        assert_eq!(defaults.schedule_days().len(), 5);
    }

    #[test]
    fn test_missing_keys_parse_as_none() {
        let defaults = ConfigDefaults::from_json_str("{}").unwrap();

        assert!(defaults.default_recipients().is_none());
        assert!(defaults.default_phones().is_none());
        assert!(defaults.default_subject().is_none());
        assert!(defaults.default_message().is_none());
    }

    #[test]
    fn test_empty_subject_counts_as_absent() {
        let defaults =
            ConfigDefaults::from_json_str(r#"{"subjects": {"default": "  "}}"#).unwrap();
        assert!(defaults.default_subject().is_none());
    }

    #[test]
    fn test_method_key_is_parsed() {
        let defaults = ConfigDefaults::from_json_str(r#"{"method": "both"}"#).unwrap();
        assert_eq!(defaults.default_method(), Some(DispatchMethod::Both));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ConfigDefaults::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let err = ConfigDefaults::from_file("/no/such/reminder.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/reminder.json"));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let defaults = ConfigDefaults::from_file(file.path()).unwrap();
        assert_eq!(defaults.default_subject(), Some("Reminder"));
    }

    #[test]
    fn test_schedule_time_parsing() {
        let defaults = ConfigDefaults::from_json_str(FULL_CONFIG).unwrap();
        let time = defaults.schedule_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        let pm = ConfigDefaults::from_json_str(r#"{"time": "04:15:PM"}"#).unwrap();
        assert_eq!(
            pm.schedule_time().unwrap(),
            NaiveTime::from_hms_opt(16, 15, 0).unwrap()
        );

        let bad = ConfigDefaults::from_json_str(r#"{"time": "half past nine"}"#).unwrap();
        assert!(bad.schedule_time().is_none());
    }
}
