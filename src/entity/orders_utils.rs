use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryOrder, QuerySelect,
};

use super::{orders, users};

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct DailyTotal {
    pub username: Option<String>,
    pub telegram_id: i64,
    pub first_name: String,
    pub date: String,
    pub count: i64,
}

pub async fn record_order(
    connection: &DatabaseConnection,
    date: &str,
    time: &str,
    location: &str,
    telegram_id: i64,
) -> Result<(), DbErr> {
    orders::Entity::insert(orders::ActiveModel {
        date: ActiveValue::Set(date.to_string()),
        time: ActiveValue::Set(time.to_string()),
        location: ActiveValue::Set(location.to_string()),
        telegram_id: ActiveValue::Set(Some(telegram_id)),
        ..Default::default()
    })
    .exec(connection)
    .await?;

    Ok(())
}

/// Order counts per booked date, latest date first. Dates without orders are
/// dropped by the `HAVING` clause, so an empty store yields an empty report.
pub async fn daily_totals(connection: &DatabaseConnection) -> Result<Vec<DailyTotal>, DbErr> {
    users::Entity::find()
        .select_only()
        .column(users::Column::Username)
        .column(users::Column::TelegramId)
        .column(users::Column::FirstName)
        .column(orders::Column::Date)
        .column_as(orders::Column::Id.count(), "count")
        .join_rev(
            JoinType::LeftJoin,
            orders::Entity::belongs_to(users::Entity)
                .from(orders::Column::TelegramId)
                .to(users::Column::TelegramId)
                .into(),
        )
        .group_by(orders::Column::Date)
        .having(Expr::cust("COUNT(orders.id) > 0"))
        .order_by_desc(orders::Column::Date)
        .into_model::<DailyTotal>()
        .all(connection)
        .await
}
