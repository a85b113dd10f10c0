use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::weekday::{day_offset, weekday_name};
use crate::errors::{Result, SchoolAdminError};

const EVENT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// 每周循环的课时（存储格式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

/// 日历中的具体时间段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// 解析 `HH:MM`（兼容 `HH:MM:SS`，秒数被忽略）
///
/// 小时必须是两位数，`9:00` 不被接受。
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime> {
    let value = raw.trim();
    let invalid = || SchoolAdminError::validation(format!("Invalid time '{raw}', expected HH:MM"));

    if !matches!(value.len(), 5 | 8) || value.as_bytes().get(2) != Some(&b':') {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .and_then(|time| NaiveTime::from_hms_opt(time.hour(), time.minute(), 0))
        .ok_or_else(invalid)
}

/// 格式化为 `HH:MM`
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// 校验起止时间并返回规范化后的 `(start, end)`
pub fn validate_time_range(start_time: &str, end_time: &str) -> Result<(String, String)> {
    let start = parse_time_of_day(start_time)?;
    let end = parse_time_of_day(end_time)?;
    if start >= end {
        return Err(SchoolAdminError::validation(format!(
            "start_time ({}) must be before end_time ({})",
            format_time_of_day(start),
            format_time_of_day(end)
        )));
    }
    Ok((format_time_of_day(start), format_time_of_day(end)))
}

/// 解析日历传回的日期时间
///
/// 接受 `YYYY-MM-DDTHH:MM`、`YYYY-MM-DDTHH:MM:SS` 以及带时区的 RFC 3339；
/// 带时区时取其本地部分，即用户在日历上看到的时间。
pub fn parse_event_datetime(raw: &str) -> Result<NaiveDateTime> {
    let value = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, EVENT_FORMAT))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|e| SchoolAdminError::date_parse(format!("Invalid datetime '{raw}': {e}")))
}

/// 日历使用的日期时间格式
pub fn format_event_datetime(value: NaiveDateTime) -> String {
    value.format(EVENT_FORMAT).to_string()
}

/// 存储格式 -> 指定周内的日历时间段
pub fn slot_to_event(
    day_of_week: Option<&str>,
    start_time: &str,
    end_time: &str,
    week_start: NaiveDate,
) -> Result<EventSpan> {
    let offset = day_offset(day_of_week)?;
    let date = week_start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| SchoolAdminError::validation("Week start is out of range"))?;

    let start = date.and_time(parse_time_of_day(start_time)?);
    let end = date.and_time(parse_time_of_day(end_time)?);
    if start >= end {
        return Err(SchoolAdminError::validation(format!(
            "start_time ({start_time}) must be before end_time ({end_time})"
        )));
    }

    Ok(EventSpan { start, end })
}

/// 日历时间段 -> 存储格式
///
/// 起止必须在同一天，星期由开始日期决定。
pub fn event_to_slot(start: NaiveDateTime, end: NaiveDateTime) -> Result<WeeklySlot> {
    if start.date() != end.date() {
        return Err(SchoolAdminError::validation(
            "A roster slot must start and end on the same day",
        ));
    }
    if start >= end {
        return Err(SchoolAdminError::validation("start must be before end"));
    }

    Ok(WeeklySlot {
        day_of_week: weekday_name(start.weekday()).to_string(),
        start_time: format_time_of_day(start.time()),
        end_time: format_time_of_day(end.time()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WEEKDAY_NAMES;

    fn june_3() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_wednesday_slot_in_week_of_june_3() {
        let span = slot_to_event(Some("Wednesday"), "09:00", "10:30", june_3()).unwrap();
        assert_eq!(format_event_datetime(span.start), "2024-06-05T09:00");
        assert_eq!(format_event_datetime(span.end), "2024-06-05T10:30");
    }

    #[test]
    fn test_sunday_is_last_day_of_week() {
        let by_name = slot_to_event(Some("Sunday"), "08:00", "09:00", june_3()).unwrap();
        let by_seven = slot_to_event(Some("7"), "08:00", "09:00", june_3()).unwrap();
        let by_zero = slot_to_event(Some("0"), "08:00", "09:00", june_3()).unwrap();
        assert_eq!(by_name, by_seven);
        assert_eq!(by_name, by_zero);
        assert_eq!(format_event_datetime(by_name.start), "2024-06-09T08:00");
    }

    #[test]
    fn test_missing_day_lands_on_week_start() {
        let span = slot_to_event(None, "13:15", "14:00", june_3()).unwrap();
        assert_eq!(span.start.date(), june_3());
    }

    #[test]
    fn test_round_trip_every_weekday() {
        let times = [("07:05", "07:50"), ("09:00", "10:30"), ("22:00", "23:59")];
        for name in WEEKDAY_NAMES {
            for (start, end) in times {
                let span = slot_to_event(Some(name), start, end, june_3()).unwrap();
                let slot = event_to_slot(span.start, span.end).unwrap();
                assert_eq!(slot.day_of_week, name);
                assert_eq!(slot.start_time, start);
                assert_eq!(slot.end_time, end);
            }
        }
    }

    #[test]
    fn test_round_trip_through_formatted_strings() {
        let span = slot_to_event(Some("friday"), "11:45", "12:30", june_3()).unwrap();
        let start = parse_event_datetime(&format_event_datetime(span.start)).unwrap();
        let end = parse_event_datetime(&format_event_datetime(span.end)).unwrap();
        let slot = event_to_slot(start, end).unwrap();
        assert_eq!(slot.day_of_week, "Friday");
        assert_eq!(slot.start_time, "11:45");
        assert_eq!(slot.end_time, "12:30");
    }

    #[test]
    fn test_parse_rfc3339_keeps_local_wall_time() {
        let dt = parse_event_datetime("2024-06-05T09:00:00+02:00").unwrap();
        assert_eq!(format_event_datetime(dt), "2024-06-05T09:00");
    }

    #[test]
    fn test_malformed_times_rejected() {
        assert!(parse_time_of_day("9:00").is_err());
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("12:00:00:00").is_err());
        assert!(parse_time_of_day("12:5").is_err());
        assert!(parse_time_of_day("1200:").is_err());
        assert!(parse_time_of_day("07:3a").is_err());
        assert_eq!(
            format_time_of_day(parse_time_of_day("08:30:00").unwrap()),
            "08:30"
        );
    }

    #[test]
    fn test_time_range_validation() {
        assert_eq!(
            validate_time_range("08:00", "09:15").unwrap(),
            ("08:00".to_string(), "09:15".to_string())
        );
        assert!(validate_time_range("10:00", "10:00").is_err());
        assert!(validate_time_range("11:00", "10:00").is_err());
    }

    #[test]
    fn test_event_spanning_two_days_rejected() {
        let start = parse_event_datetime("2024-06-05T23:00").unwrap();
        let end = parse_event_datetime("2024-06-06T01:00").unwrap();
        assert!(event_to_slot(start, end).is_err());
    }
}
