//! Report delivery over SMTP.

use chrono::{DateTime, Local};
use lettre::message::header::ContentType;
use lettre::{Message, SmtpTransport, Transport};

use crate::app::Result;
use crate::config::EmailConfig;

pub struct Mailer {
    from: String,
    to: String,
    host: String,
}

impl Mailer {
    pub fn new(email: &EmailConfig) -> Self {
        Self {
            from: email.from.clone(),
            to: email.to.clone(),
            host: email.host.clone(),
        }
    }

    /// Send the report as a plain-text message via the local transport.
    ///
    /// Deciding whether there is anything to send is the caller's job;
    /// `send` assumes a non-empty report.
    pub fn send(&self, report: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(subject(Local::now()))
            .header(ContentType::TEXT_PLAIN)
            .body(report.to_string())?;

        let transport = SmtpTransport::builder_dangerous(&self.host).build();
        transport.send(&message)?;
        Ok(())
    }
}

/// Subject line for a report sent at `now`.
fn subject(now: DateTime<Local>) -> String {
    format!("[darui report] {}", now.format("%Y-%m-%d %H:%M"))
}
