use crate::models::appointments::Appointment;
use crate::queue::read::QueueEntry;

use super::responses::{AppointmentItem, QueueItem};

pub fn appointment_item(appo: &Appointment) -> AppointmentItem {
    AppointmentItem {
        aid: appo.aid,
        shop_id: appo.shop_id.clone(),
        service_id: appo.service_id.clone(),
        customer_id: appo.customer_id.clone(),
        token_number: appo.token_number,
        booking_date: format!("{}", appo.booking_date),
        requested_start_time: crate::utils::format_time_str(&appo.requested_start_time),
        computed_start_time: crate::utils::format_time_str(&appo.computed_start_time),
        duration_minutes: appo.duration_minutes,
        price: appo.price,
        status: appo.status.clone(),
    }
}

pub fn queue_item(entry: &QueueEntry, caller: Option<&str>) -> QueueItem {
    QueueItem {
        aid: entry.appointment.aid,
        token_number: entry.appointment.token_number,
        customer_id: entry.appointment.customer_id.clone(),
        service_name: entry.service_name.clone(),
        duration_minutes: entry.appointment.duration_minutes,
        price: entry.appointment.price,
        status: entry.status.as_str().to_string(),
        start_time: crate::utils::format_time_str(&entry.computed_start_time),
        position: entry.position,
        people_ahead: entry.position,
        is_mine: caller.map_or(false, |id| entry.appointment.customer_id == id),
    }
}
