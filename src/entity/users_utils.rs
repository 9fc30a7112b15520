use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use super::users;

/// Insert-if-absent: a user who already exists is left untouched, keeping the
/// first-seen name and username. The `ON CONFLICT DO NOTHING` outcome surfaces
/// as `RecordNotInserted`, which is the expected no-op here.
pub async fn ensure_user(
    connection: &DatabaseConnection,
    telegram_id: i64,
    first_name: &str,
    username: Option<&str>,
) -> Result<(), DbErr> {
    let result = users::Entity::insert(users::ActiveModel {
        telegram_id: ActiveValue::Set(telegram_id),
        first_name: ActiveValue::Set(first_name.to_string()),
        username: ActiveValue::Set(username.map(str::to_string)),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(users::Column::TelegramId)
            .do_nothing()
            .to_owned(),
    )
    .exec(connection)
    .await;

    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(error) => Err(error),
    }
}
