mod console;
mod telegram;

pub use console::ConsoleNotifier;
pub use telegram::TelegramNotifier;

use crate::domain::Alert;
use tracing::warn;

/// Fans an alert out to every configured channel. Delivery problems are
/// logged and swallowed here; callers never see them and never retry.
pub struct NotifierHub {
    console: ConsoleNotifier,
    telegram: Option<TelegramNotifier>,
}

impl NotifierHub {
    pub fn new(console: ConsoleNotifier, telegram: Option<TelegramNotifier>) -> Self {
        Self { console, telegram }
    }

    pub fn telegram_enabled(&self) -> bool {
        self.telegram.is_some()
    }

    pub async fn send(&self, alert: &Alert) {
        self.console.send(alert);

        if let Some(telegram) = &self.telegram {
            if let Err(e) = telegram.send(alert).await {
                warn!("Telegram notification failed: {}", e);
            }
        }
    }
}
