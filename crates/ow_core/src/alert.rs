//! Telegram HTML message templates.

use chrono::{DateTime, Utc};

use crate::Article;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

pub fn format_alert(article: &Article) -> String {
    let description = article
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description available");

    format!(
        "🛢️ <b>CRUDE OIL NEWS ALERT</b>\n\n\
         <b>{}</b>\n\n\
         {}\n\n\
         Source: {}\n\
         <a href=\"{}\">Read more</a>\n\
         Time: {}",
        escape_html(&article.title),
        escape_html(description),
        escape_html(&article.source_name),
        escape_attr(&article.url),
        article.published_at.format(TIME_FORMAT),
    )
}

/// The fixed message used to verify bot credentials.
pub fn format_test_message(now: DateTime<Utc>) -> String {
    format!(
        "🛢️ <b>Test Message</b>\n\n\
         Crude Oil News Agent is now active!\n\n\
         This bot will monitor and alert you about high-intensity crude oil news.\n\n\
         Time: {}",
        now.format(TIME_FORMAT)
    )
}
