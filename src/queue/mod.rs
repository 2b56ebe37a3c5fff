pub mod allocator;
pub mod error;
pub mod projector;
pub mod read;
pub mod status;

use crate::models::appointments::{Appointment, NewAppointment};
use crate::models::services::ServiceData;
use crate::queue::error::QueueError;
use crate::queue::status::AppointStatus;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::MysqlConnection;

pub fn load_appointment(conn: &MysqlConnection, aid: u64) -> Result<Appointment, QueueError> {
    use crate::schema::appointments;

    appointments::table
        .filter(appointments::aid.eq(aid))
        .get_result::<Appointment>(conn)
        .optional()?
        .ok_or(QueueError::NotFound("appointment"))
}

// Booking: allocate a token in the shop-day of the requested time, persist
// the appointment with the service copied by value, then re-project the
// whole shop-day. Runs inside the caller's transaction; the token row lock
// serializes concurrent bookings for the same shop-day.
pub fn book(
    conn: &MysqlConnection,
    service: &ServiceData,
    customer_id: &str,
    requested_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<Appointment, QueueError> {
    use crate::schema::appointments;

    if requested_start < now {
        return Err(QueueError::InvalidTime);
    }

    let day = requested_start.date();
    let token = allocator::allocate(conn, &service.shop_id, day)?;

    let data = NewAppointment {
        shop_id: service.shop_id.clone(),
        service_id: service.service_id.clone(),
        customer_id: customer_id.to_string(),
        token_number: token,
        booking_date: day,
        requested_start_time: requested_start,
        // placeholder, overwritten by the projection below
        computed_start_time: requested_start,
        duration_minutes: service.duration_minutes,
        price: service.price,
        status: AppointStatus::Pending.as_str().to_string(),
        created_at: now,
        updated_at: now,
    };
    diesel::insert_into(appointments::table)
        .values(data)
        .execute(conn)?;
    let aid = crate::database::last_inserted_id(conn)?;

    projector::reproject(conn, &service.shop_id, day, now)?;

    log::info!(
        "shop {}: appointment {} booked with token {} on {}",
        service.shop_id,
        aid,
        token,
        day
    );
    load_appointment(conn, aid)
}

// Status change per the transition table. Entering a terminal status removes
// the appointment from the non-terminal set, so the shop-day is re-projected;
// PENDING -> CONFIRMED keeps the set unchanged and is not.
pub fn transition(
    conn: &MysqlConnection,
    aid: u64,
    target: AppointStatus,
    now: NaiveDateTime,
) -> Result<Appointment, QueueError> {
    use crate::schema::appointments;

    let appo = load_appointment(conn, aid)?;
    let current = AppointStatus::parse(&appo.status)?;
    if !current.can_transition_to(target) {
        log::warn!(
            "appointment {}: rejected status transition {} -> {}",
            aid,
            current,
            target
        );
        return Err(QueueError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    diesel::update(appointments::table.filter(appointments::aid.eq(aid)))
        .set((
            appointments::status.eq(target.as_str()),
            appointments::updated_at.eq(now),
        ))
        .execute(conn)?;

    if target.is_terminal() {
        projector::reproject(conn, &appo.shop_id, appo.booking_date, now)?;
    }

    log::info!("appointment {}: status {} -> {}", aid, current, target);
    load_appointment(conn, aid)
}

pub fn validate_reschedule(
    current: AppointStatus,
    new_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), QueueError> {
    if current.is_terminal() {
        return Err(QueueError::NotReschedulable);
    }
    if new_start < now {
        return Err(QueueError::InvalidTime);
    }
    Ok(())
}

// Reschedule: the token marks the place in line, so a same-day time change
// keeps it and only updates the advisory requested time. Moving to another
// calendar day appends to that day's queue with a fresh token; both days are
// re-projected.
pub fn reschedule(
    conn: &MysqlConnection,
    aid: u64,
    new_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<Appointment, QueueError> {
    use crate::schema::appointments;

    let appo = load_appointment(conn, aid)?;
    let current = AppointStatus::parse(&appo.status)?;
    validate_reschedule(current, new_start, now)?;

    let new_day = new_start.date();
    if new_day == appo.booking_date {
        diesel::update(appointments::table.filter(appointments::aid.eq(aid)))
            .set((
                appointments::requested_start_time.eq(new_start),
                appointments::updated_at.eq(now),
            ))
            .execute(conn)?;
        projector::reproject(conn, &appo.shop_id, appo.booking_date, now)?;
        log::info!(
            "appointment {}: rescheduled within {}, token {} kept",
            aid,
            appo.booking_date,
            appo.token_number
        );
    } else {
        let token = allocator::allocate(conn, &appo.shop_id, new_day)?;
        diesel::update(appointments::table.filter(appointments::aid.eq(aid)))
            .set((
                appointments::requested_start_time.eq(new_start),
                appointments::booking_date.eq(new_day),
                appointments::token_number.eq(token),
                appointments::updated_at.eq(now),
            ))
            .execute(conn)?;
        projector::reproject(conn, &appo.shop_id, appo.booking_date, now)?;
        projector::reproject(conn, &appo.shop_id, new_day, now)?;
        log::info!(
            "appointment {}: moved from {} to {}, new token {}",
            aid,
            appo.booking_date,
            new_day,
            token
        );
    }

    load_appointment(conn, aid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 5, 10).and_hms(h, m, 0)
    }

    #[test]
    fn reschedule_rejected_for_terminal_appointments() {
        for status in &[AppointStatus::Completed, AppointStatus::Cancelled] {
            match validate_reschedule(*status, at(12, 0), at(10, 0)) {
                Err(QueueError::NotReschedulable) => {}
                other => panic!("expected NotReschedulable, got {:?}", other),
            }
        }
    }

    #[test]
    fn reschedule_rejected_for_past_time() {
        match validate_reschedule(AppointStatus::Pending, at(9, 59), at(10, 0)) {
            Err(QueueError::InvalidTime) => {}
            other => panic!("expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn reschedule_accepted_for_open_appointments() {
        assert!(validate_reschedule(AppointStatus::Pending, at(12, 0), at(10, 0)).is_ok());
        assert!(validate_reschedule(AppointStatus::Confirmed, at(10, 0), at(10, 0)).is_ok());
    }
}
