//! 排课时间段与日历事件的互相转换
//!
//! 排课以「星期 + 起止时间」存储（每周循环的课时），日历组件需要具体的
//! 起止日期时间。转换总是锚定到某一周的周一：
//!
//! - 存储 -> 日历：星期解析为距周一的偏移量，与 `HH:MM` 组合成当周的日期时间
//! - 日历 -> 存储：拖拽得到的日期时间反推出星期名称与 `HH:MM`

mod slot;
mod weekday;

pub use slot::{
    EventSpan, WeeklySlot, event_to_slot, format_event_datetime, format_time_of_day,
    parse_event_datetime, parse_time_of_day, slot_to_event, validate_time_range,
};
pub use weekday::{
    WEEKDAY_NAMES, current_week_start, day_offset, normalize_day_of_week, parse_day_of_week,
    week_start, weekday_name,
};
