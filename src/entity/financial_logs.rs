//! 收支流水实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: Option<i64>,
    pub kind: String,
    pub category: String,
    pub amount_cents: i64,
    pub description: Option<String>,
    pub date: Date,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}


// 从数据库模型转换为业务模型
impl Model {
    pub fn into_financial_log(self) -> crate::models::finance::entities::FinancialLog {
        use crate::models::finance::entities::{FinanceKind, FinancialLog};
        use chrono::{DateTime, Utc};

        FinancialLog {
            id: self.id,
            student_id: self.student_id,
            kind: self.kind.parse::<FinanceKind>().unwrap_or(FinanceKind::Income),
            category: self.category,
            amount_cents: self.amount_cents,
            description: self.description,
            date: self.date,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
