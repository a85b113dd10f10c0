//! 缺勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "absences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub roster_id: i64,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub date: Date,
    pub reason: Option<String>,
    pub excused: bool,
    pub recorded_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rosters::Entity",
        from = "Column::RosterId",
        to = "super::rosters::Column::Id"
    )]
    Roster,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::rosters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roster.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_absence(self) -> crate::models::absences::entities::Absence {
        use crate::models::absences::entities::Absence;
        use chrono::{DateTime, Utc};

        Absence {
            id: self.id,
            roster_id: self.roster_id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            date: self.date,
            reason: self.reason,
            excused: self.excused,
            recorded_by: self.recorded_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
