use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::errors::{Result, SchoolAdminError};

/// 以周一为一周的第一天
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 解析星期
///
/// 名称交给 chrono 解析（英文全称或三字母缩写，不区分大小写）；另外接受
/// 序号 `1..=7`（1 为周一，7 为周日），`0` 同样表示周日。
pub fn parse_day_of_week(raw: &str) -> Result<Weekday> {
    let value = raw.trim();

    if let Ok(ordinal) = value.parse::<u8>() {
        return match ordinal {
            0 | 7 => Ok(Weekday::Sun),
            1..=6 => Weekday::try_from(ordinal - 1)
                .map_err(|_| SchoolAdminError::validation(format!("Invalid day_of_week: {raw}"))),
            _ => Err(SchoolAdminError::validation(format!(
                "Invalid day_of_week ordinal: {raw}, expected 0-7"
            ))),
        };
    }

    value
        .parse::<Weekday>()
        .map_err(|_| SchoolAdminError::validation(format!("Invalid day_of_week: {raw}")))
}

/// 星期的英文名称（存储格式）
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// 规范化星期为存储格式
pub fn normalize_day_of_week(raw: &str) -> Result<String> {
    parse_day_of_week(raw).map(|day| weekday_name(day).to_string())
}

/// 距周一的天数偏移
///
/// 未设置星期的排课落在一周的第一天。
pub fn day_offset(day_of_week: Option<&str>) -> Result<u64> {
    match day_of_week.map(str::trim) {
        None | Some("") => Ok(0),
        Some(raw) => parse_day_of_week(raw).map(|day| day.num_days_from_monday() as u64),
    }
}

/// 给定日期所在周的周一
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
        .unwrap_or(date)
}

/// 当前（本地时间）所在周的周一
pub fn current_week_start() -> NaiveDate {
    week_start(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!(parse_day_of_week("Wednesday").unwrap(), Weekday::Wed);
        assert_eq!(parse_day_of_week("wednesday").unwrap(), Weekday::Wed);
        assert_eq!(parse_day_of_week(" FRI ").unwrap(), Weekday::Fri);
        assert_eq!(parse_day_of_week("sAt").unwrap(), Weekday::Sat);
    }

    #[test]
    fn test_sunday_ordinals() {
        let sunday = parse_day_of_week("Sunday").unwrap();
        assert_eq!(parse_day_of_week("7").unwrap(), sunday);
        assert_eq!(parse_day_of_week("0").unwrap(), sunday);
        assert_eq!(day_offset(Some("7")).unwrap(), 6);
    }

    #[test]
    fn test_ordinals_start_on_monday() {
        assert_eq!(parse_day_of_week("1").unwrap(), Weekday::Mon);
        assert_eq!(parse_day_of_week("6").unwrap(), Weekday::Sat);
    }

    #[test]
    fn test_invalid_days() {
        assert!(parse_day_of_week("8").is_err());
        assert!(parse_day_of_week("Funday").is_err());
        assert!(parse_day_of_week("Mo").is_err());
        assert!(parse_day_of_week("").is_err());
    }

    #[test]
    fn test_missing_day_defaults_to_week_start() {
        assert_eq!(day_offset(None).unwrap(), 0);
        assert_eq!(day_offset(Some("  ")).unwrap(), 0);
    }

    #[test]
    fn test_week_start() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(week_start(monday), monday);
        assert_eq!(week_start(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()), monday);
        assert_eq!(week_start(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()), monday);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_day_of_week("3").unwrap(), "Wednesday");
        assert_eq!(normalize_day_of_week("sun").unwrap(), "Sunday");
    }
}
