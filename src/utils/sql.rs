//! SQL 辅助函数

use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};

/// 转义 LIKE 通配符，使用户输入按字面匹配
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 任一列包含（已转义的）关键字
pub fn contains_any<C: ColumnTrait>(columns: &[C], escaped: &str) -> Condition {
    columns.iter().fold(Condition::any(), |cond, column| {
        cond.add(column.like(LikeExpr::new(format!("%{escaped}%")).escape('\\')))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
        assert_eq!(escape_like_pattern("Room A"), "Room A");
    }
}
