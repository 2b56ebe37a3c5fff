#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn parse_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDateTime> {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
    const TIME_FMT_UTC: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
    const TIME_FMT_NAIVE: &str = "%Y-%m-%dT%H:%M:%S";
    const TIME_FMT_NAIVE_SHORT: &str = "%Y-%m-%dT%H:%M";

    let s = s.as_ref();
    if let Ok(t) = NaiveDateTime::parse_from_str(s, TIME_FMT_UTC) {
        return Ok(t);
    }
    if let Ok(t) = DateTime::parse_from_str(s, TIME_FMT) {
        return Ok(t.naive_utc());
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, TIME_FMT_NAIVE) {
        return Ok(t);
    }
    NaiveDateTime::parse_from_str(s, TIME_FMT_NAIVE_SHORT).context("Wrong time format")
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

pub fn parse_date_str_opt<S: AsRef<str>>(date: Option<S>) -> anyhow::Result<NaiveDate> {
    match date {
        Some(date) => NaiveDate::parse_from_str(date.as_ref(), "%Y-%m-%d")
            .context("Wrong date format"),
        None => Ok(Utc::today().naive_utc()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset_time() {
        let t = parse_time_str("2024-05-10T10:30:00.000+05:30").unwrap();
        assert_eq!(t, NaiveDate::from_ymd(2024, 5, 10).and_hms(5, 0, 0));
    }

    #[test]
    fn parses_utc_time() {
        let t = parse_time_str("2024-05-10T10:30:00.000Z").unwrap();
        assert_eq!(t, NaiveDate::from_ymd(2024, 5, 10).and_hms(10, 30, 0));
    }

    #[test]
    fn parses_naive_time_with_and_without_seconds() {
        // datetime-local inputs come in without seconds
        let short = parse_time_str("2024-05-10T10:30").unwrap();
        let long = parse_time_str("2024-05-10T10:30:00").unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn rejects_garbage_time() {
        assert!(parse_time_str("10:30 tomorrow").is_err());
    }

    #[test]
    fn formats_with_utc_offset() {
        let t = NaiveDate::from_ymd(2024, 5, 10).and_hms(9, 5, 0);
        assert_eq!(format_time_str(&t), "2024-05-10T09:05:00+00:00");
    }

    #[test]
    fn parses_explicit_date() {
        let d = parse_date_str_opt(Some("2024-05-10")).unwrap();
        assert_eq!(d, NaiveDate::from_ymd(2024, 5, 10));
    }

    #[test]
    fn rejects_bad_date() {
        assert!(parse_date_str_opt(Some("10/05/2024")).is_err());
    }
}
