mod requests;
mod responses;
mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{appointments::Appointment, shops::ShopData},
    queue::{self, read, status::AppointStatus},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use chrono::Utc;
use diesel::prelude::*;

use self::requests::*;
use self::responses::*;
use self::utils::{appointment_item, queue_item};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(update_status).service(search_queue);
}

crate::post_funcs! {
    (update_status, "/update_status", UpdateStatusRequest, AppointmentResponse),
    (search_queue, "/search_queue", SearchQueueRequest, SearchQueueResponse),
}

async fn update_status_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdateStatusRequest>,
) -> anyhow::Result<AppointmentResponse> {
    let info = info.into_inner();
    let target = AppointStatus::parse(&info.status)?;

    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        conn.transaction::<Appointment, anyhow::Error, _>(|| {
            let now = Utc::now().naive_utc();
            let appo = queue::transition(&conn, info.aid, target, now)?;
            Ok(appo)
        })
    })
    .await?;

    Ok(AppointmentResponse {
        success: true,
        err: "".to_string(),
        appointment: appointment_item(&appo),
    })
}

async fn search_queue_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchQueueRequest>,
) -> anyhow::Result<SearchQueueResponse> {
    use crate::schema::shops;

    let info = info.into_inner();
    assert::assert_shop(&pool, info.shop_id.clone()).await?;

    let day = crate::utils::parse_date_str_opt(info.date.as_deref())?;

    let conn = get_db_conn(&pool)?;
    let shop_id = info.shop_id.clone();
    let (shop, entries) = web::block(
        move || -> Result<(ShopData, Vec<read::QueueEntry>), anyhow::Error> {
            let now = Utc::now().naive_utc();
            let shop = shops::table
                .filter(shops::shop_id.eq(&shop_id))
                .get_result::<ShopData>(&conn)
                .context("DB error")?;
            let entries = read::load_shop_queue(&conn, &shop_id, day, now)?;
            Ok((shop, entries))
        },
    )
    .await?;

    let in_queue = entries
        .iter()
        .filter(|entry| !entry.status.is_terminal())
        .count();
    let queue = entries.iter().map(queue_item).collect();

    Ok(SearchQueueResponse {
        success: true,
        err: "".to_string(),
        shop_id: shop.shop_id,
        shop_name: shop.shop_name,
        date: format!("{}", day),
        in_queue,
        queue,
    })
}
