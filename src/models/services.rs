#[derive(Queryable)]
pub struct ServiceData {
    pub service_id: String,
    pub shop_id: String,
    pub service_name: String,
    pub duration_minutes: i32,
    pub price: i32,
}
