#[derive(Queryable)]
pub struct ShopData {
    pub shop_id: String,
    pub shop_name: String,
    pub address: String,
}
