use teloxide::prelude::*;
use tera::{Context, Tera};

use crate::types::{BookingDialogue, BookingState, HandlerResult};

/// Aborts the current conversation without persisting anything.
pub async fn reset_booking(
    bot: &Bot,
    dialogue: &BookingDialogue,
    message: &Message,
    tera: &Tera,
) -> HandlerResult {
    let answer = tera.render("reset.txt", &Context::new())?;
    bot.send_message(message.chat.id, answer).await?;
    dialogue.update(BookingState::Idle).await?;
    Ok(())
}
