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
pub struct AppointmentListResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
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
    pub people_ahead: Option<usize>,
    pub is_mine: bool,
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

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTurnResponse {
    pub success: bool,
    pub err: String,
    pub found: bool,
    pub turn: Option<QueueItem>,
}

crate::impl_err_response! {
    AppointmentResponse,
    AppointmentListResponse,
    SearchQueueResponse,
    MyTurnResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let item = AppointmentItem {
            aid: 7,
            token_number: 2,
            status: "PENDING".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("tokenNumber").is_some());
        assert!(json.get("computedStartTime").is_some());
        assert!(json.get("token_number").is_none());
    }

    #[test]
    fn err_response_keeps_kind_string() {
        let response = AppointmentResponse::err("No such appointment");
        assert!(!response.success);
        assert_eq!(response.err, "No such appointment");
        assert_eq!(response.appointment.aid, 0);
    }
}
