use chrono::NaiveDate;

#[derive(Queryable)]
pub struct TokenCounter {
    pub shop_id: String,
    pub booking_date: NaiveDate,
    pub next_token: u64,
}
