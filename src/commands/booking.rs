use sea_orm::DatabaseConnection;
use teloxide::prelude::*;
use tera::{Context, Tera};

use crate::entity::orders_utils::record_order;
use crate::keyboards::{location_keyboard, time_keyboard};
use crate::types::{BookingDialogue, BookingState, HandlerResult};

/// `AwaitingDate`: keeps the chosen date and swaps the prompt for the fixed
/// time grid. The callback is acknowledged first so the client never shows a
/// stuck spinner, whatever happens afterwards.
pub async fn choose_date(
    bot: &Bot,
    dialogue: &BookingDialogue,
    query: &CallbackQuery,
    tera: &Tera,
) -> HandlerResult {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(date) = query.data.clone() else {
        log::warn!("Ignoring date selection without a payload: {:?}", query);
        return Ok(());
    };

    if let Some(message) = query.message.as_ref() {
        let answer = tera.render("choose_time.txt", &Context::new())?;
        bot.edit_message_text(message.chat.id, message.id, answer)
            .reply_markup(time_keyboard())
            .await?;
    }

    dialogue.update(BookingState::AwaitingTime { date }).await?;
    Ok(())
}

/// `AwaitingTime`: keeps the chosen time and offers the locations.
pub async fn choose_time(
    bot: &Bot,
    dialogue: &BookingDialogue,
    query: &CallbackQuery,
    tera: &Tera,
    date: String,
) -> HandlerResult {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(time) = query.data.clone() else {
        log::warn!("Ignoring time selection without a payload: {:?}", query);
        return Ok(());
    };

    if let Some(message) = query.message.as_ref() {
        let answer = tera.render("choose_location.txt", &Context::new())?;
        bot.edit_message_text(message.chat.id, message.id, answer)
            .reply_markup(location_keyboard())
            .await?;
    }

    dialogue
        .update(BookingState::AwaitingLocation { date, time })
        .await?;
    Ok(())
}

/// `AwaitingLocation`: the final step. Persists the order, replaces the
/// prompt with the confirmation and ends the conversation.
pub async fn choose_location(
    bot: &Bot,
    dialogue: &BookingDialogue,
    query: &CallbackQuery,
    connection: &DatabaseConnection,
    tera: &Tera,
    date: String,
    time: String,
) -> HandlerResult {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(location) = query.data.clone() else {
        log::warn!("Ignoring location selection without a payload: {:?}", query);
        return Ok(());
    };

    record_order(connection, &date, &time, &location, query.from.id.0 as i64).await?;

    let mut context = Context::new();
    context.insert("date", &date);
    context.insert("time", &time);
    context.insert("location", &location);
    let answer = tera.render("confirmation.txt", &context)?;
    if let Some(message) = query.message.as_ref() {
        bot.edit_message_text(message.chat.id, message.id, answer)
            .await?;
    }

    dialogue.exit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tera::{Context, Tera};

    #[test]
    fn confirmation_lists_the_answers_comma_separated() {
        let tera = Tera::new("templates/**/*").unwrap();
        let mut context = Context::new();
        context.insert("date", "10 March 2024");
        context.insert("time", "12:00");
        context.insert("location", "Location 1");

        assert_eq!(
            tera.render("confirmation.txt", &context).unwrap(),
            "10 March 2024, 12:00, Location 1"
        );
    }
}
