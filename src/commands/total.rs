use sea_orm::DatabaseConnection;
use teloxide::prelude::*;

use crate::entity::orders_utils::{daily_totals, DailyTotal};
use crate::types::HandlerResult;

pub fn format_totals(rows: &[DailyTotal]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{} {} {} {} {}",
                row.username.as_deref().unwrap_or("-"),
                row.telegram_id,
                row.first_name,
                row.date,
                row.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sends the per-date order counts, latest date first. An empty store means
/// nothing to send: Telegram rejects zero-length messages.
pub async fn show_totals(
    bot: &Bot,
    message: &Message,
    connection: &DatabaseConnection,
) -> HandlerResult {
    let totals = daily_totals(connection).await?;
    if totals.is_empty() {
        log::info!("No orders recorded yet, skipping report for {}", message.chat.id);
        return Ok(());
    }

    bot.send_message(message.chat.id, format_totals(&totals))
        .await?;
    Ok(())
}
