use booking_bot::commands::{booking, cancel, start, total};
use booking_bot::config::Config;
use booking_bot::connection;
use booking_bot::types::{BookingDialogue, BookingState, HandlerResult};
use sea_orm::DatabaseConnection;
use std::error::Error;
use std::fmt::Debug;
use std::sync::Arc;
use teloxide::dispatching::dialogue::{self, GetChatId, InMemStorage};
use teloxide::{prelude::*, utils::command::BotCommands};
use tera::Tera;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
enum Command {
    #[command(description = "book a date, time and location.")]
    Start,
    #[command(description = "reset the conversation state.")]
    Cancel,
    #[command(description = "show order counts per date.")]
    Total,
}

const FAILURE_NOTICE: &str = "Something went wrong. We're looking into it.";

/// The only failure recovery there is: log the update together with the
/// error, and apologize to the chat when we know which chat that is.
async fn recover<U: Debug>(
    bot: &Bot,
    chat_id: Option<ChatId>,
    update: &U,
    outcome: HandlerResult,
) -> ResponseResult<()> {
    let Err(error) = outcome else {
        return respond(());
    };

    log::error!("Update {:?} caused error {:?}", update, error);
    if let Some(chat_id) = chat_id {
        if let Err(send_error) = bot.send_message(chat_id, FAILURE_NOTICE).await {
            log::error!("Can't deliver failure notice: {:?}", send_error);
        }
    }
    respond(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::init();
    let _sentry_guard = config.sentry_url.clone().map(sentry::init);
    log::info!("Initialized config...");

    let connection = Arc::new(connection::init(&config).await?);
    let tera = Arc::new(Tera::new("templates/**/*")?);
    let bot = Bot::new(config.telegram_token.clone());

    let command_handler = dptree::entry()
        .filter_map(|msg: Message| Command::parse(msg.text().unwrap_or_default(), "").ok())
        .branch(dptree::case![Command::Start].endpoint(
            |bot: Bot,
             dialogue: BookingDialogue,
             msg: Message,
             connection: Arc<DatabaseConnection>,
             tera: Arc<Tera>| async move {
                let outcome = start::begin_booking(&bot, &dialogue, &msg, &connection, &tera).await;
                recover(&bot, Some(msg.chat.id), &msg, outcome).await
            },
        ))
        .branch(dptree::case![Command::Cancel].endpoint(
            |bot: Bot, dialogue: BookingDialogue, msg: Message, tera: Arc<Tera>| async move {
                let outcome = cancel::reset_booking(&bot, &dialogue, &msg, &tera).await;
                recover(&bot, Some(msg.chat.id), &msg, outcome).await
            },
        ))
        .branch(dptree::case![Command::Total].endpoint(
            |bot: Bot, msg: Message, connection: Arc<DatabaseConnection>| async move {
                let outcome = total::show_totals(&bot, &msg, &connection).await;
                recover(&bot, Some(msg.chat.id), &msg, outcome).await
            },
        ));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(
            // Plain text outside the conversation is echoed back verbatim.
            dptree::filter(|msg: Message| msg.text().is_some()).endpoint(
                |bot: Bot, msg: Message| async move {
                    let text = msg.text().unwrap_or_default().to_owned();
                    let outcome: HandlerResult = bot
                        .send_message(msg.chat.id, text)
                        .await
                        .map(|_| ())
                        .map_err(Into::into);
                    recover(&bot, Some(msg.chat.id), &msg, outcome).await
                },
            ),
        );

    let callback_handler = Update::filter_callback_query()
        .branch(dptree::case![BookingState::AwaitingDate].endpoint(
            |bot: Bot, dialogue: BookingDialogue, query: CallbackQuery, tera: Arc<Tera>| async move {
                let outcome = booking::choose_date(&bot, &dialogue, &query, &tera).await;
                recover(&bot, query.chat_id(), &query, outcome).await
            },
        ))
        .branch(dptree::case![BookingState::AwaitingTime { date }].endpoint(
            |bot: Bot,
             dialogue: BookingDialogue,
             query: CallbackQuery,
             tera: Arc<Tera>,
             date: String| async move {
                let outcome = booking::choose_time(&bot, &dialogue, &query, &tera, date).await;
                recover(&bot, query.chat_id(), &query, outcome).await
            },
        ))
        .branch(
            dptree::case![BookingState::AwaitingLocation { date, time }].endpoint(
                |bot: Bot,
                 dialogue: BookingDialogue,
                 query: CallbackQuery,
                 connection: Arc<DatabaseConnection>,
                 tera: Arc<Tera>,
                 (date, time): (String, String)| async move {
                    let outcome = booking::choose_location(
                        &bot,
                        &dialogue,
                        &query,
                        &connection,
                        &tera,
                        date,
                        time,
                    )
                    .await;
                    recover(&bot, query.chat_id(), &query, outcome).await
                },
            ),
        )
        // Stale buttons from abandoned conversations land here: acknowledge
        // them so the client stops spinning, then drop them.
        .endpoint(|bot: Bot, query: CallbackQuery| async move {
            log::warn!("Ignoring callback with no matching state: {:?}", query);
            let outcome: HandlerResult = bot
                .answer_callback_query(query.id.clone())
                .await
                .map(|_| ())
                .map_err(Into::into);
            recover(&bot, query.chat_id(), &query, outcome).await
        });

    let handler = dialogue::enter::<Update, InMemStorage<BookingState>, BookingState, _>()
        .branch(message_handler)
        .branch(callback_handler);

    log::info!("Started listening...");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<BookingState>::new(),
            connection,
            tera
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
