use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;

use crate::domain::ports::EmailTransport;
use crate::utils::error::{ReminderError, Result, SendError};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Email transport over an SMTP relay. Credentials come from the
/// `EMAIL` and `APP_PW` environment variables (an account address and an
/// app password); missing credentials surface as an authentication
/// failure on each send attempt, never as a construction failure, so one
/// unsendable channel cannot abort the run.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    account: Option<String>,
}

impl SmtpMailer {
    pub fn new(host: &str, account: Option<(String, String)>) -> Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host).map_err(|e| {
            ReminderError::InvalidConfigValue {
                field: "SMTP_HOST".to_string(),
                value: host.to_string(),
                reason: e.to_string(),
            }
        })?;

        if let Some((email, password)) = &account {
            builder = builder.credentials(Credentials::new(email.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            account: account.map(|(email, _)| email),
        })
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());
        let account = match (env::var("EMAIL"), env::var("APP_PW")) {
            (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                Some((email, password))
            }
            _ => None,
        };

        Self::new(&host, account)
    }
}

#[async_trait]
impl EmailTransport for SmtpMailer {
    async fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), SendError> {
        let account = self
            .account
            .as_deref()
            .ok_or_else(|| SendError::Auth("no username or password configured".to_string()))?;

        let from: Mailbox = account
            .parse()
            .map_err(|e| SendError::Auth(format!("sending account {account} is invalid: {e}")))?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| SendError::Rejected(format!("{recipient}: {e}")))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .body(message.to_string())
            .map_err(|e| SendError::Rejected(e.to_string()))?;

        match self.transport.send(email).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_permanent() => Err(SendError::Rejected(e.to_string())),
            Err(e) => Err(SendError::Network(e.to_string())),
        }
    }
}
