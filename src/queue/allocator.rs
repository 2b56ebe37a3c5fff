use crate::models::token_counters::TokenCounter;
use crate::queue::error::QueueError;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::MysqlConnection;

// Hand out the next token for one shop-day. The upsert takes the counter
// row's lock for the rest of the enclosing transaction, so concurrent
// bookings for the same shop-day are serialized here and can never read the
// same value. Tokens start at 1 and are never handed out twice; cancelled
// tokens are not reused.
pub fn allocate(conn: &MysqlConnection, shop_id: &str, day: NaiveDate) -> Result<u64, QueueError> {
    use crate::schema::token_counters;
    use diesel::sql_types;

    diesel::sql_query(
        "INSERT INTO token_counters (shop_id, booking_date, next_token) VALUES (?, ?, 1) \
         ON DUPLICATE KEY UPDATE next_token = next_token + 1",
    )
    .bind::<sql_types::Text, _>(shop_id)
    .bind::<sql_types::Date, _>(day)
    .execute(conn)
    .map_err(QueueError::Allocation)?;

    let counter = token_counters::table
        .filter(token_counters::shop_id.eq(shop_id))
        .filter(token_counters::booking_date.eq(day))
        .get_result::<TokenCounter>(conn)
        .map_err(QueueError::Allocation)?;

    Ok(counter.next_token)
}
