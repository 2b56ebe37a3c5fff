use crate::schema::appointments;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Queryable)]
pub struct Appointment {
    pub aid: u64,
    pub shop_id: String,
    pub service_id: String,
    pub customer_id: String,
    pub token_number: u64,
    pub booking_date: NaiveDate,
    pub requested_start_time: NaiveDateTime,
    pub computed_start_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub price: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub shop_id: String,
    pub service_id: String,
    pub customer_id: String,
    pub token_number: u64,
    pub booking_date: NaiveDate,
    pub requested_start_time: NaiveDateTime,
    pub computed_start_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub price: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
