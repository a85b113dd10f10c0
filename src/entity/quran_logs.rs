//! 古兰经背诵记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quran_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub date: Date,
    pub kind: String,
    pub start_surah: i32,
    pub start_ayah: i32,
    pub end_surah: i32,
    pub end_ayah: i32,
    pub notes: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
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


// 从数据库模型转换为业务模型，附带由经文索引推导出的 hizb 与经文数
impl Model {
    pub fn into_quran_log(self) -> crate::models::quran_logs::entities::QuranLog {
        use crate::models::quran::entities::VerseKey;
        use crate::models::quran_logs::entities::{QuranLog, QuranLogKind};
        use crate::quran::QuranIndex;
        use chrono::{DateTime, Utc};

        let index = QuranIndex::global();
        let start = VerseKey {
            surah: self.start_surah,
            ayah: self.start_ayah,
        };
        let end = VerseKey {
            surah: self.end_surah,
            ayah: self.end_ayah,
        };

        QuranLog {
            id: self.id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            date: self.date,
            kind: self
                .kind
                .parse::<QuranLogKind>()
                .unwrap_or(QuranLogKind::Memorization),
            start_surah: self.start_surah,
            start_ayah: self.start_ayah,
            end_surah: self.end_surah,
            end_ayah: self.end_ayah,
            notes: self.notes,
            start_hizb: index.hizb_of(start.surah, start.ayah).ok(),
            end_hizb: index.hizb_of(end.surah, end.ayah).ok(),
            verses_count: index.verses_between(start, end).ok(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
