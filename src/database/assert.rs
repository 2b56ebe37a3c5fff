use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_shop(pool: &web::Data<DbPool>, shop_id: String) -> anyhow::Result<()> {
    use crate::schema::shops;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        shops::table
            .filter(shops::shop_id.eq(shop_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such shop");
    }

    Ok(())
}
