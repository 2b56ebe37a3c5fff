use serde::Serialize;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentItem {
    pub aid: u64,
    pub shop_id: String,
    pub service_id: String,
    pub customer_id: String,
    pub token_number: u64,
    pub booking_date: String,
    pub requested_start_time: String,
    pub computed_start_time: String,
    pub duration_minutes: i32,
    pub price: i32,
    pub status: String,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub success: bool,
    pub err: String,
    pub appointment: AppointmentItem,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub aid: u64,
    pub token_number: u64,
    pub customer_id: String,
    pub service_name: String,
    pub duration_minutes: i32,
    pub price: i32,
    pub status: String,
    pub start_time: String,
    pub position: Option<usize>,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueueResponse {
    pub success: bool,
    pub err: String,
    pub shop_id: String,
    pub shop_name: String,
    pub date: String,
    pub in_queue: usize,
    pub queue: Vec<QueueItem>,
}

crate::impl_err_response! {
    AppointmentResponse,
    SearchQueueResponse,
}
