//! Operator notification over the Telegram Bot API

use crate::config::ConfigSource;
use crate::endpoints::{self, EndpointError};
use crate::http;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_VAR: &str = "TG_BOT_TOKEN";

/// Environment variable holding the Telegram chat id
pub const CHAT_ID_VAR: &str = "TG_USER_ID";

/// Delivers outcome messages to an operator-facing channel
pub trait Notifier {
    /// Sends one text message; returns once delivery has been dispatched
    fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// [`Notifier`] backed by the Telegram Bot API sendMessage endpoint
///
/// Construction never fails: a notifier built without credentials reports
/// [`NotifyError::Misconfigured`] from every `send` instead, so that a run
/// without Telegram still executes its checks and reports on the console.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    bot_token: Option<String>,
    chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Telegram wraps every reply in an envelope with an `ok` flag
#[derive(Debug, Deserialize)]
struct SendMessageReply {
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    /// Builds a notifier from TG_BOT_TOKEN and TG_USER_ID
    pub fn from_config(config: &dyn ConfigSource) -> Self {
        Self {
            bot_token: config.get(BOT_TOKEN_VAR),
            chat_id: config.get(CHAT_ID_VAR),
        }
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        let (Some(bot_token), Some(chat_id)) = (&self.bot_token, &self.chat_id) else {
            return Err(NotifyError::Misconfigured);
        };

        let url = endpoints::telegram_send_url(bot_token)?;
        let client = http::build_client(http::NOTIFY_TIMEOUT)?;

        let payload = SendMessage {
            chat_id: chat_id.as_str(),
            text,
        };
        let response = client.post(url).json(&payload).send()?;

        let status = response.status();
        let reply: SendMessageReply = response.json()?;
        if !status.is_success() || !reply.ok {
            return Err(NotifyError::Delivery {
                status: status.as_u16(),
                description: reply
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(())
    }
}

/// Notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Required Telegram configuration is absent
    #[error("TG_BOT_TOKEN and TG_USER_ID environment variables must be set")]
    Misconfigured,

    /// Endpoint URL construction error
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// HTTP error while talking to Telegram
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram answered but did not accept the message
    #[error("Telegram rejected the message (status {status}): {description}")]
    Delivery {
        /// HTTP status of the reply
        status: u16,
        /// Telegram's error description
        description: String,
    },
}
