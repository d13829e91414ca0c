use crate::domain::model::{DispatchMethod, ReminderRequest};

/// Method used when neither recipients, phones, nor an explicit
/// `--method` override decide the channel. Text is the documented
/// default here; the `method` key in the JSON defaults file overrides it
/// per deployment.
pub const DEFAULT_METHOD: DispatchMethod = DispatchMethod::Text;

/// Decide whether the run sends email, texts, or both. Total and
/// deterministic: the same request always selects the same method.
///
/// Precedence:
/// 1. both recipient lists populated, or an explicit `both` override
/// 2. an `email` override, or any email recipients
/// 3. a `text` override, or any phone numbers
/// 4. [`DEFAULT_METHOD`]
pub fn select_method(request: &ReminderRequest) -> DispatchMethod {
    let has_emails = !request.recipients.is_empty();
    let has_phones = !request.phones.is_empty();

    if (has_emails && has_phones) || request.method == Some(DispatchMethod::Both) {
        DispatchMethod::Both
    } else if request.method == Some(DispatchMethod::Email) || has_emails {
        DispatchMethod::Email
    } else if request.method == Some(DispatchMethod::Text) || has_phones {
        DispatchMethod::Text
    } else {
        DEFAULT_METHOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        recipients: &[&str],
        phones: &[&str],
        method: Option<DispatchMethod>,
    ) -> ReminderRequest {
        ReminderRequest {
            recipients: recipients.iter().map(|s| s.to_string()).collect(),
            phones: phones.iter().map(|s| s.to_string()).collect(),
            message: "Log your hours".to_string(),
            subject: "Reminder".to_string(),
            method,
        }
    }

    #[test]
    fn test_populated_lists_decide_the_method() {
        assert_eq!(
            select_method(&request(&["a@b.com"], &[], None)),
            DispatchMethod::Email
        );
        assert_eq!(
            select_method(&request(&[], &["5551234567"], None)),
            DispatchMethod::Text
        );
        assert_eq!(
            select_method(&request(&["a@b.com"], &["5551234567"], None)),
            DispatchMethod::Both
        );
    }

    #[test]
    fn test_explicit_override_wins_over_empty_lists() {
        assert_eq!(
            select_method(&request(&[], &[], Some(DispatchMethod::Both))),
            DispatchMethod::Both
        );
        assert_eq!(
            select_method(&request(&[], &[], Some(DispatchMethod::Email))),
            DispatchMethod::Email
        );
        assert_eq!(
            select_method(&request(&[], &[], Some(DispatchMethod::Text))),
            DispatchMethod::Text
        );
    }

    #[test]
    fn test_both_override_beats_a_single_populated_list() {
        assert_eq!(
            select_method(&request(&["a@b.com"], &[], Some(DispatchMethod::Both))),
            DispatchMethod::Both
        );
    }

    #[test]
    fn test_nothing_supplied_falls_back_to_text() {
        assert_eq!(select_method(&request(&[], &[], None)), DEFAULT_METHOD);
        assert_eq!(select_method(&request(&[], &[], None)), DispatchMethod::Text);
    }
}
