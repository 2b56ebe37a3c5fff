mod requests;
mod responses;
mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{appointments::Appointment, services::ServiceData, shops::ShopData},
    queue::{self, error::QueueError, read, status::AppointStatus},
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
    cfg.service(book)
        .service(view_appointment)
        .service(search_my_appointments)
        .service(reschedule)
        .service(cancel_appointment)
        .service(search_queue)
        .service(my_turn);
}

crate::post_funcs! {
    (book, "/book", BookRequest, AppointmentResponse),
    (view_appointment, "/view_appointment", ViewAppointmentRequest, AppointmentResponse),
    (search_my_appointments, "/search_my_appointments", SearchMyAppointmentsRequest, AppointmentListResponse),
    (reschedule, "/reschedule", RescheduleRequest, AppointmentResponse),
    (cancel_appointment, "/cancel_appointment", CancelAppointmentRequest, AppointmentResponse),
    (search_queue, "/search_queue", SearchQueueRequest, SearchQueueResponse),
    (my_turn, "/my_turn", MyTurnRequest, MyTurnResponse),
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<AppointmentResponse> {
    use crate::schema::services;

    let info = info.into_inner();
    assert::assert_shop(&pool, info.shop_id.clone()).await?;

    let requested_start =
        crate::utils::parse_time_str(&info.start_time).context("Wrong format on 'startTime'")?;

    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        conn.transaction::<Appointment, anyhow::Error, _>(|| {
            let now = Utc::now().naive_utc();
            let service = services::table
                .filter(services::service_id.eq(&info.service_id))
                .filter(services::shop_id.eq(&info.shop_id))
                .get_result::<ServiceData>(&conn)
                .optional()
                .context("DB error")?
                .ok_or(QueueError::NotFound("service"))?;
            let appo = queue::book(&conn, &service, &info.customer_id, requested_start, now)?;
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

async fn view_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewAppointmentRequest>,
) -> anyhow::Result<AppointmentResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        appointments::table
            .filter(appointments::aid.eq(info.aid))
            .get_result::<Appointment>(&conn)
            .optional()
    })
    .await
    .context("DB error")?
    .ok_or(QueueError::NotFound("appointment"))?;

    Ok(AppointmentResponse {
        success: true,
        err: "".to_string(),
        appointment: appointment_item(&appo),
    })
}

async fn search_my_appointments_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchMyAppointmentsRequest>,
) -> anyhow::Result<AppointmentListResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let status = info.status.unwrap_or_else(|| "ALL".to_string());
    if status != "ALL" {
        AppointStatus::parse(&status)?;
    }

    let conn = get_db_conn(&pool)?;
    let appos = web::block(move || {
        appointments::table
            .filter(appointments::customer_id.eq(&info.customer_id))
            .filter(appointments::status.eq(&status).or(status == "ALL"))
            .order((
                appointments::booking_date.desc(),
                appointments::token_number.desc(),
            ))
            .get_results::<Appointment>(&conn)
    })
    .await
    .context("DB error")?;

    let appos = appos.iter().map(appointment_item).collect();

    Ok(AppointmentListResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}

async fn reschedule_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RescheduleRequest>,
) -> anyhow::Result<AppointmentResponse> {
    let info = info.into_inner();
    let new_start =
        crate::utils::parse_time_str(&info.start_time).context("Wrong format on 'startTime'")?;

    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        conn.transaction::<Appointment, anyhow::Error, _>(|| {
            let now = Utc::now().naive_utc();
            let appo = queue::reschedule(&conn, info.aid, new_start, now)?;
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

async fn cancel_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CancelAppointmentRequest>,
) -> anyhow::Result<AppointmentResponse> {
    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        conn.transaction::<Appointment, anyhow::Error, _>(|| {
            let now = Utc::now().naive_utc();
            let appo = queue::transition(&conn, info.aid, AppointStatus::Cancelled, now)?;
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

    let caller = info.customer_id.as_deref();
    let in_queue = entries
        .iter()
        .filter(|entry| !entry.status.is_terminal())
        .count();
    let queue = entries
        .iter()
        .map(|entry| queue_item(entry, caller))
        .collect();

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

async fn my_turn_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MyTurnRequest>,
) -> anyhow::Result<MyTurnResponse> {
    let info = info.into_inner();
    assert::assert_shop(&pool, info.shop_id.clone()).await?;

    let conn = get_db_conn(&pool)?;
    let shop_id = info.shop_id.clone();
    let customer_id = info.customer_id.clone();
    let entry = web::block(move || -> Result<Option<read::QueueEntry>, anyhow::Error> {
        let now = Utc::now().naive_utc();
        let today = Utc::today().naive_utc();
        let entry = read::find_mine(&conn, &shop_id, &customer_id, today, now)?;
        Ok(entry)
    })
    .await?;

    let turn = entry
        .as_ref()
        .map(|entry| queue_item(entry, Some(&info.customer_id)));

    Ok(MyTurnResponse {
        success: true,
        err: "".to_string(),
        found: turn.is_some(),
        turn,
    })
}
