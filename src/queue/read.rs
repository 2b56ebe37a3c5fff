use crate::models::appointments::Appointment;
use crate::models::services::ServiceData;
use crate::queue::error::QueueError;
use crate::queue::projector;
use crate::queue::status::AppointStatus;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::MysqlConnection;
use std::collections::HashMap;

pub struct QueueEntry {
    pub appointment: Appointment,
    pub service_name: String,
    pub status: AppointStatus,
    // None for terminal entries; they keep their last projected start time
    pub position: Option<usize>,
    pub computed_start_time: NaiveDateTime,
}

// One consistent snapshot of a shop-day, token-ordered, with the projection
// recomputed against the current clock. Terminal entries stay in the list
// for history views but are excluded from positions. A single SELECT feeds
// the pure projection, so readers never see a half-updated queue.
pub fn load_shop_queue(
    conn: &MysqlConnection,
    shop_id: &str,
    day: NaiveDate,
    now: NaiveDateTime,
) -> Result<Vec<QueueEntry>, QueueError> {
    use crate::schema::{appointments, services};

    let rows = appointments::table
        .filter(appointments::shop_id.eq(shop_id))
        .filter(appointments::booking_date.eq(day))
        .inner_join(services::table.on(appointments::service_id.eq(services::service_id)))
        .order(appointments::token_number.asc())
        .get_results::<(Appointment, ServiceData)>(conn)?;

    let mut parsed = Vec::with_capacity(rows.len());
    for (appo, service) in rows {
        let status = AppointStatus::parse(&appo.status)?;
        parsed.push((appo, service, status));
    }

    let open: Vec<projector::SlotInput> = parsed
        .iter()
        .filter(|(_, _, status)| !status.is_terminal())
        .map(|(appo, _, _)| projector::slot_input(appo))
        .collect();
    let projected = projector::project(&open, projector::day_start(day), now);
    let slots: HashMap<u64, &projector::ProjectedSlot> =
        projected.iter().map(|slot| (slot.aid, slot)).collect();

    let entries = parsed
        .into_iter()
        .map(|(appo, service, status)| {
            let slot = slots.get(&appo.aid);
            QueueEntry {
                position: slot.map(|slot| slot.position),
                computed_start_time: slot
                    .map(|slot| slot.computed_start_time)
                    .unwrap_or(appo.computed_start_time),
                service_name: service.service_name,
                status,
                appointment: appo,
            }
        })
        .collect();
    Ok(entries)
}

pub fn find_mine(
    conn: &MysqlConnection,
    shop_id: &str,
    customer_id: &str,
    day: NaiveDate,
    now: NaiveDateTime,
) -> Result<Option<QueueEntry>, QueueError> {
    let entries = load_shop_queue(conn, shop_id, day, now)?;
    Ok(entries
        .into_iter()
        .find(|entry| !entry.status.is_terminal() && entry.appointment.customer_id == customer_id))
}
