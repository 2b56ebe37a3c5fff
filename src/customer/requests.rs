use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub shop_id: String,
    pub service_id: String,
    pub customer_id: String,
    pub start_time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAppointmentRequest {
    pub aid: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMyAppointmentsRequest {
    pub customer_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub aid: u64,
    pub start_time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentRequest {
    pub aid: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueueRequest {
    pub shop_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTurnRequest {
    pub shop_id: String,
    pub customer_id: String,
}
