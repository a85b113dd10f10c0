use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 排课表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Rosters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rosters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rosters::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Rosters::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Rosters::TeacherId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rosters::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rosters::DayOfWeek).string().null())
                    .col(ColumnDef::new(Rosters::StartTime).string().not_null())
                    .col(ColumnDef::new(Rosters::EndTime).string().not_null())
                    .col(ColumnDef::new(Rosters::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rosters::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rosters::Table, Rosters::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rosters::Table, Rosters::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rosters::Table, Rosters::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rosters::Table, Rosters::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 缺勤表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Absences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Absences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Absences::RosterId).big_integer().not_null())
                    .col(ColumnDef::new(Absences::StudentId).big_integer().null())
                    .col(ColumnDef::new(Absences::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Absences::Date).date().not_null())
                    .col(ColumnDef::new(Absences::Reason).text().null())
                    .col(
                        ColumnDef::new(Absences::Excused)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Absences::RecordedBy).big_integer().null())
                    .col(ColumnDef::new(Absences::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Absences::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absences::Table, Absences::RosterId)
                            .to(Rosters::Table, Rosters::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absences::Table, Absences::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Absences::Table, Absences::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 考核表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Name).string().not_null())
                    .col(ColumnDef::new(Assessments::Kind).string().not_null())
                    .col(ColumnDef::new(Assessments::Date).date().not_null())
                    .col(ColumnDef::new(Assessments::MaxScore).double().not_null())
                    .col(
                        ColumnDef::new(Assessments::Weight)
                            .double()
                            .not_null()
                            .default(1.0),
                    )
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::ClassId)
                            .to(Classes::Table, Classes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::SubjectId)
                            .to(Subjects::Table, Subjects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 成绩表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Results::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Results::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Results::Score).double().not_null())
                    .col(ColumnDef::new(Results::Comment).text().null())
                    .col(ColumnDef::new(Results::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Results::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Results::Table, Results::AssessmentId)
                            .to(Assessments::Table, Assessments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Results::Table, Results::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 财务流水表 ====================
        manager
            .create_table(
                Table::create()
                    .table(FinancialLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FinancialLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FinancialLogs::StudentId).big_integer().null())
                    .col(ColumnDef::new(FinancialLogs::Kind).string().not_null())
                    .col(ColumnDef::new(FinancialLogs::Category).string().not_null())
                    .col(
                        ColumnDef::new(FinancialLogs::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FinancialLogs::Description).text().null())
                    .col(ColumnDef::new(FinancialLogs::Date).date().not_null())
                    .col(
                        ColumnDef::new(FinancialLogs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialLogs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FinancialLogs::Table, FinancialLogs::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 古兰经进度表 ====================
        manager
            .create_table(
                Table::create()
                    .table(QuranLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuranLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuranLogs::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(QuranLogs::TeacherId).big_integer().null())
                    .col(ColumnDef::new(QuranLogs::Date).date().not_null())
                    .col(ColumnDef::new(QuranLogs::Kind).string().not_null())
                    .col(ColumnDef::new(QuranLogs::StartSurah).integer().not_null())
                    .col(ColumnDef::new(QuranLogs::StartAyah).integer().not_null())
                    .col(ColumnDef::new(QuranLogs::EndSurah).integer().not_null())
                    .col(ColumnDef::new(QuranLogs::EndAyah).integer().not_null())
                    .col(ColumnDef::new(QuranLogs::Notes).text().null())
                    .col(ColumnDef::new(QuranLogs::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(QuranLogs::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuranLogs::Table, QuranLogs::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuranLogs::Table, QuranLogs::TeacherId)
                            .to(Teachers::Table, Teachers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 索引 ====================
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rosters_class_id")
                    .table(Rosters::Table)
                    .col(Rosters::ClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rosters_teacher_id")
                    .table(Rosters::Table)
                    .col(Rosters::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rosters_classroom_id")
                    .table(Rosters::Table)
                    .col(Rosters::ClassroomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_absences_roster_id")
                    .table(Absences::Table)
                    .col(Absences::RosterId)
                    .to_owned(),
            )
            .await?;

        // 每个学生在每次考核中只有一条成绩
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_results_assessment_student")
                    .table(Results::Table)
                    .col(Results::AssessmentId)
                    .col(Results::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_financial_logs_date")
                    .table(FinancialLogs::Table)
                    .col(FinancialLogs::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quran_logs_student_id")
                    .table(QuranLogs::Table)
                    .col(QuranLogs::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuranLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FinancialLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Absences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rosters::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rosters {
    #[sea_orm(iden = "rosters")]
    Table,
    Id,
    ClassId,
    SubjectId,
    TeacherId,
    ClassroomId,
    DayOfWeek,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Absences {
    #[sea_orm(iden = "absences")]
    Table,
    Id,
    RosterId,
    StudentId,
    TeacherId,
    Date,
    Reason,
    Excused,
    RecordedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    ClassId,
    SubjectId,
    Name,
    Kind,
    Date,
    MaxScore,
    Weight,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Results {
    #[sea_orm(iden = "results")]
    Table,
    Id,
    AssessmentId,
    StudentId,
    Score,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FinancialLogs {
    #[sea_orm(iden = "financial_logs")]
    Table,
    Id,
    StudentId,
    Kind,
    Category,
    AmountCents,
    Description,
    Date,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuranLogs {
    #[sea_orm(iden = "quran_logs")]
    Table,
    Id,
    StudentId,
    TeacherId,
    Date,
    Kind,
    StartSurah,
    StartAyah,
    EndSurah,
    EndAyah,
    Notes,
    CreatedAt,
    UpdatedAt,
}

// 以下为前一次迁移中创建的表，仅用于外键引用
#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Classrooms {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
}
