//! Outbound notifications

mod discord_webhook;

pub use discord_webhook::DiscordWebhookNotifier;
