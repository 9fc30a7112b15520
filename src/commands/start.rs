use sea_orm::DatabaseConnection;
use teloxide::prelude::*;
use tera::{Context, Tera};

use crate::entity::users_utils::ensure_user;
use crate::keyboards::date_keyboard;
use crate::types::{BookingDialogue, BookingState, HandlerResult};

/// Entry point of the booking conversation. Registers the sender, offers the
/// next eight dates and moves the dialogue to `AwaitingDate`. Restarting
/// mid-conversation simply abandons the previous progress.
pub async fn begin_booking(
    bot: &Bot,
    dialogue: &BookingDialogue,
    message: &Message,
    connection: &DatabaseConnection,
    tera: &Tera,
) -> HandlerResult {
    if let Some(user) = message.from() {
        ensure_user(
            connection,
            user.id.0 as i64,
            &user.first_name,
            user.username.as_deref(),
        )
        .await?;
    }

    let today = chrono::Local::now().date_naive();
    let answer = tera.render("choose_date.txt", &Context::new())?;
    bot.send_message(message.chat.id, answer)
        .reply_markup(date_keyboard(today))
        .await?;

    dialogue.update(BookingState::AwaitingDate).await?;
    Ok(())
}
