use crate::models::appointments::Appointment;
use crate::queue::error::QueueError;
use crate::queue::status::NON_TERMINAL_STATUSES;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::MysqlConnection;

pub struct SlotInput {
    pub aid: u64,
    pub token_number: u64,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedSlot {
    pub aid: u64,
    pub token_number: u64,
    pub position: usize,
    pub computed_start_time: NaiveDateTime,
}

// Walk the non-terminal set in token order with a running clock starting at
// max(now, day start). Requested times play no part here; the queue is FIFO
// by token.
pub fn project(
    slots: &[SlotInput],
    day_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Vec<ProjectedSlot> {
    let mut ordered: Vec<&SlotInput> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.token_number);

    let mut t = now.max(day_start);
    let mut projected = Vec::with_capacity(ordered.len());
    for (position, slot) in ordered.into_iter().enumerate() {
        projected.push(ProjectedSlot {
            aid: slot.aid,
            token_number: slot.token_number,
            position,
            computed_start_time: t,
        });
        t = t + Duration::minutes(slot.duration_minutes.max(0) as i64);
    }
    projected
}

pub fn slot_input(appo: &Appointment) -> SlotInput {
    SlotInput {
        aid: appo.aid,
        token_number: appo.token_number,
        duration_minutes: appo.duration_minutes,
    }
}

pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_hms(0, 0, 0)
}

// Recompute and persist computed_start_time for every non-terminal
// appointment of one shop-day. Must run inside the mutating transaction so
// the queue is never observed half-updated.
pub fn reproject(
    conn: &MysqlConnection,
    shop_id: &str,
    day: NaiveDate,
    now: NaiveDateTime,
) -> Result<(), QueueError> {
    use crate::schema::appointments;

    let rows = appointments::table
        .filter(appointments::shop_id.eq(shop_id))
        .filter(appointments::booking_date.eq(day))
        .filter(appointments::status.eq_any(NON_TERMINAL_STATUSES.iter().cloned()))
        .order(appointments::token_number.asc())
        .get_results::<Appointment>(conn)?;

    let inputs: Vec<SlotInput> = rows.iter().map(slot_input).collect();
    for slot in project(&inputs, day_start(day), now) {
        diesel::update(appointments::table.filter(appointments::aid.eq(slot.aid)))
            .set((
                appointments::computed_start_time.eq(slot.computed_start_time),
                appointments::updated_at.eq(now),
            ))
            .execute(conn)?;
    }

    log::debug!(
        "reprojected queue of shop {} on {}: {} open appointments",
        shop_id,
        day,
        rows.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(aid: u64, token: u64, minutes: i32) -> SlotInput {
        SlotInput {
            aid,
            token_number: token,
            duration_minutes: minutes,
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 5, 10).and_hms(h, m, 0)
    }

    fn start_of_day() -> NaiveDateTime {
        day_start(NaiveDate::from_ymd(2024, 5, 10))
    }

    #[test]
    fn empty_queue_projects_nothing() {
        assert!(project(&[], start_of_day(), at(10, 0)).is_empty());
    }

    #[test]
    fn single_appointment_starts_now() {
        // Scenario A: the first booking of the day starts at now, whatever
        // the customer asked for.
        let projected = project(&[slot(1, 1, 20)], start_of_day(), at(10, 0));
        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].position, 0);
        assert_eq!(projected[0].computed_start_time, at(10, 0));
    }

    #[test]
    fn second_appointment_queues_behind_first() {
        // Scenario B: 20 minutes of service ahead push token 2 to 10:20.
        let projected = project(&[slot(1, 1, 20), slot(2, 2, 15)], start_of_day(), at(10, 0));
        assert_eq!(projected[0].computed_start_time, at(10, 0));
        assert_eq!(projected[1].computed_start_time, at(10, 20));
        assert_eq!(projected[1].position, 1);
    }

    #[test]
    fn cancelled_head_rebases_queue_to_now() {
        // Scenario C: token 1 cancelled (absent from the non-terminal set),
        // token 2 moves to position 0 and is re-based to now.
        let projected = project(&[slot(2, 2, 15)], start_of_day(), at(10, 5));
        assert_eq!(projected[0].token_number, 2);
        assert_eq!(projected[0].position, 0);
        assert_eq!(projected[0].computed_start_time, at(10, 5));
    }

    #[test]
    fn start_time_is_prefix_sum_of_durations() {
        let slots = [slot(1, 1, 20), slot(2, 2, 15), slot(3, 3, 45), slot(4, 4, 10)];
        let projected = project(&slots, start_of_day(), at(9, 30));
        let mut expected = at(9, 30);
        for (k, p) in projected.iter().enumerate() {
            assert_eq!(p.position, k);
            assert_eq!(p.computed_start_time, expected);
            expected = expected + Duration::minutes(slots[k].duration_minutes as i64);
        }
    }

    #[test]
    fn day_start_floor_applies_before_opening() {
        // Booked the evening before: the clock starts at the day boundary,
        // not at the (earlier) current time.
        let now = NaiveDate::from_ymd(2024, 5, 9).and_hms(22, 0, 0);
        let projected = project(&[slot(1, 1, 30), slot(2, 2, 30)], start_of_day(), now);
        assert_eq!(projected[0].computed_start_time, at(0, 0));
        assert_eq!(projected[1].computed_start_time, at(0, 30));
    }

    #[test]
    fn projection_is_idempotent() {
        let slots = [slot(1, 1, 25), slot(2, 2, 40), slot(3, 3, 5)];
        let now = at(11, 15);
        let first = project(&slots, start_of_day(), now);
        let second = project(&slots, start_of_day(), now);
        assert_eq!(first, second);
    }

    #[test]
    fn token_order_wins_over_input_order() {
        let slots = [slot(30, 3, 10), slot(10, 1, 10), slot(20, 2, 10)];
        let projected = project(&slots, start_of_day(), at(12, 0));
        let tokens: Vec<u64> = projected.iter().map(|p| p.token_number).collect();
        assert_eq!(tokens, vec![1, 2, 3]);
        assert_eq!(projected[0].aid, 10);
        assert_eq!(projected[2].computed_start_time, at(12, 20));
    }

    #[test]
    fn removing_one_slot_keeps_relative_order() {
        let before = project(
            &[slot(1, 1, 10), slot(2, 2, 10), slot(3, 3, 10)],
            start_of_day(),
            at(12, 0),
        );
        let after = project(&[slot(1, 1, 10), slot(3, 3, 10)], start_of_day(), at(12, 0));
        assert_eq!(after.len(), 2);
        assert!(after[0].token_number < after[1].token_number);
        assert_eq!(after[1].token_number, before[2].token_number);
        assert_eq!(after[1].position, 1);
    }
}
