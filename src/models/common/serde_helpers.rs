//! 宽松的 ID 反序列化
//!
//! 前端表单经常把 ID 以字符串提交，查询参数在 `#[serde(flatten)]` 之后也只剩字符串，
//! 这里统一接受整数或数字字符串。

use serde::Deserializer;
use serde::de::{Error, Unexpected, Visitor};
use std::fmt;

struct I64Visitor;

impl<'de> Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if value <= i64::MAX as u64 {
            Ok(value as i64)
        } else {
            Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
    }
}

// 可选值：null、缺省或空字符串都视为 None
struct OptionalI64Visitor;

impl<'de> Visitor<'de> for OptionalI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, an integer or a string containing an integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        I64Visitor.visit_i64(value).map(Some)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        I64Visitor.visit_u64(value).map(Some)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if value.trim().is_empty() {
            return Ok(None);
        }
        I64Visitor.visit_str(value).map(Some)
    }
}

/// 整数或数字字符串 -> i64
pub fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(I64Visitor)
}

/// 可选 ID，配合 `#[serde(default)]` 使用
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalI64Visitor)
}

/// 更新请求中可清空的 ID：缺省为 `None`，`null` 为 `Some(None)`
pub fn deserialize_nullable_i64<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_i64(deserializer).map(Some)
}

// 星期既可能是名称也可能是序号，空串与 null 视为未设置
struct OptionalDayOfWeekVisitor;

impl<'de> Visitor<'de> for OptionalDayOfWeekVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a weekday name or number")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(value.to_string()))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        let day = value.trim();
        Ok((!day.is_empty()).then(|| day.to_string()))
    }
}

/// 可选星期字段：`"Monday"`、`"1"` 与 `1` 都接受，规范化留给调用方
///
/// 配合 `#[serde(default)]` 使用
pub fn deserialize_optional_day_of_week<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalDayOfWeekVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(deserialize_with = "deserialize_string_to_i64")]
        class_id: i64,
        #[serde(default, deserialize_with = "deserialize_optional_i64")]
        teacher_id: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_nullable_i64")]
        mentor_id: Option<Option<i64>>,
    }

    #[test]
    fn test_ids_accept_strings_and_numbers() {
        let body: Body =
            serde_json::from_str(r#"{"class_id": "12", "teacher_id": 3, "mentor_id": "7"}"#)
                .unwrap();
        assert_eq!(body.class_id, 12);
        assert_eq!(body.teacher_id, Some(3));
        assert_eq!(body.mentor_id, Some(Some(7)));
    }

    #[test]
    fn test_missing_and_null_are_distinct() {
        let missing: Body = serde_json::from_str(r#"{"class_id": 1}"#).unwrap();
        assert_eq!(missing.teacher_id, None);
        assert_eq!(missing.mentor_id, None);

        let cleared: Body =
            serde_json::from_str(r#"{"class_id": 1, "teacher_id": "", "mentor_id": null}"#)
                .unwrap();
        assert_eq!(cleared.teacher_id, None);
        assert_eq!(cleared.mentor_id, Some(None));
    }

    #[derive(Debug, Deserialize)]
    struct Slot {
        #[serde(default, deserialize_with = "deserialize_optional_day_of_week")]
        day_of_week: Option<String>,
    }

    #[test]
    fn test_day_of_week_accepts_names_and_numbers() {
        let by_name: Slot = serde_json::from_str(r#"{"day_of_week": " Monday "}"#).unwrap();
        assert_eq!(by_name.day_of_week.as_deref(), Some("Monday"));
        let by_number: Slot = serde_json::from_str(r#"{"day_of_week": 3}"#).unwrap();
        assert_eq!(by_number.day_of_week.as_deref(), Some("3"));
    }

    #[test]
    fn test_day_of_week_blank_or_missing_is_unset() {
        for body in [r#"{}"#, r#"{"day_of_week": null}"#, r#"{"day_of_week": "  "}"#] {
            let slot: Slot = serde_json::from_str(body).unwrap();
            assert!(slot.day_of_week.is_none());
        }
    }

    #[test]
    fn test_garbage_id_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"class_id": "abc"}"#).is_err());
    }
}
