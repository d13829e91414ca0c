use crate::core::method::select_method;
use crate::domain::model::{Channel, DeliveryStatus, DispatchMethod, DispatchOutcome, ReminderRequest};
use crate::domain::ports::{EmailTransport, SmsTransport};
use crate::utils::error::SendError;
use crate::utils::validation;

/// Sends one reminder run over the selected channels. Recipients are
/// processed strictly in input order, one awaited send at a time; a
/// failed recipient is recorded and the loop moves on.
pub struct Dispatcher<E, S> {
    email: E,
    sms: S,
}

impl<E: EmailTransport, S: SmsTransport> Dispatcher<E, S> {
    pub fn new(email: E, sms: S) -> Self {
        Self { email, sms }
    }

    /// Select the method for the request, then run the per-channel loops,
    /// email first when both are selected.
    pub async fn dispatch(&self, request: &ReminderRequest) -> Vec<DispatchOutcome> {
        let method = select_method(request);
        tracing::info!("dispatch method: {method}");

        let mut outcomes = Vec::new();

        if matches!(method, DispatchMethod::Email | DispatchMethod::Both) {
            outcomes.extend(
                self.send_emails(&request.recipients, &request.message, &request.subject)
                    .await,
            );
        }

        if matches!(method, DispatchMethod::Text | DispatchMethod::Both) {
            outcomes.extend(self.send_texts(&request.phones, &request.message).await);
        }

        outcomes
    }

    pub async fn send_emails(
        &self,
        recipients: &[String],
        message: &str,
        subject: &str,
    ) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(recipients.len());

        for recipient in recipients {
            if !validation::is_valid_email(recipient) {
                tracing::warn!("invalid email {recipient}");
                outcomes.push(outcome(recipient, Channel::Email, DeliveryStatus::InvalidFormat));
                continue;
            }

            // let user know something is happening
            println!("Sending to {recipient}");

            let status = match self.email.send(recipient, subject, message).await {
                Ok(()) => {
                    tracing::info!("email sent to: {recipient}");
                    DeliveryStatus::Sent
                }
                Err(err) => {
                    log_send_failure(Channel::Email, recipient, &err);
                    DeliveryStatus::TransportError(err)
                }
            };

            outcomes.push(outcome(recipient, Channel::Email, status));
        }

        outcomes
    }

    pub async fn send_texts(&self, phones: &[String], message: &str) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(phones.len());

        for phone in phones {
            if !validation::is_valid_phone(phone) {
                tracing::warn!("invalid phone number: {phone}");
                outcomes.push(outcome(phone, Channel::Text, DeliveryStatus::InvalidFormat));
                continue;
            }

            println!("Sending to {phone}");

            let status = match self.sms.send(phone, message).await {
                Ok(()) => {
                    tracing::info!("text successfully sent to {phone}");
                    DeliveryStatus::Sent
                }
                Err(err) => {
                    log_send_failure(Channel::Text, phone, &err);
                    DeliveryStatus::TransportError(err)
                }
            };

            outcomes.push(outcome(phone, Channel::Text, status));
        }

        outcomes
    }
}

fn outcome(recipient: &str, channel: Channel, status: DeliveryStatus) -> DispatchOutcome {
    DispatchOutcome {
        recipient: recipient.to_string(),
        channel,
        status,
    }
}

// 認證失敗與一般傳輸失敗分開記錄，但都不會中斷整批發送
fn log_send_failure(channel: Channel, recipient: &str, err: &SendError) {
    match err {
        SendError::Auth(_) => {
            tracing::error!("{channel} authentication failure while sending to {recipient}: {err}")
        }
        SendError::Rejected(_) | SendError::Network(_) => {
            tracing::warn!("{channel} send failed for {recipient}: {err}")
        }
    }
}
