//! Outbound mail.
//!
//! Registration is the only mail this service sends, and the generated
//! password exists nowhere but that mail, so the relay sits on the critical
//! path of account creation rather than being a best-effort notification.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use clipvault_core::models::User;
use clipvault_core::{AppError, Config};

/// Mail transport capability. Tests substitute a recording implementation.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError>;
}

/// SMTP-backed mailer (STARTTLS relay, or plaintext for a local dev relay).
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("SMTP_HOST is not configured"))?;
        let from: Mailbox = config
            .smtp_from
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("SMTP_FROM is not configured"))?
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid SMTP_FROM address: {}", e))?;

        let builder = if config.smtp_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        let mut builder = builder.port(config.smtp_port);
        if let (Some(user), Some(password)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }
        tracing::info!(
            host = %host,
            port = config.smtp_port,
            tls = config.smtp_tls,
            "Mailer initialized"
        );

        Ok(Self {
            transport: Arc::new(builder.build()),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError> {
        let to_addr: Mailbox = to
            .parse()
            .map_err(|e| AppError::Mail(format!("invalid recipient address: {}", e)))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| AppError::Mail(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;

        tracing::info!(to = %to, "mail dispatched");
        Ok(())
    }
}

/// Render the registration notification: subject and plain-text body with
/// the login link and the generated password. The web client told users to
/// expect exactly this wording.
pub fn registration_mail(user: &User, password: &str, frontend_url: &str) -> (String, String) {
    let subject = "Thank you for creating account.".to_string();
    let login_url = format!("{}/login", frontend_url);
    let body = format!(
        "Hi {first} {last}. Please click on {login_url} and use this password to login : {password}\n\
         \n\
         Your account details are as follows:\n\
         First Name : {first}\n\
         Last Name : {last}\n\
         Email : {email}\n\
         Phone Number : {phone}",
        first = user.first_name,
        last = user.last_name,
        email = user.email,
        phone = user.phone_number,
    );
    (subject, body)
}
