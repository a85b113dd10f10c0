//! 存储抽象
//!
//! 每类资源一个子 trait，`Storage` 把它们组合在一起供服务层以
//! `Arc<dyn Storage>` 的形式使用。

use std::sync::Arc;

use crate::calendar::WeeklySlot;
use crate::errors::Result;
use crate::models::{
    PaginatedResponse,
    absences::{
        entities::Absence,
        requests::{AbsenceListParams, CreateAbsenceRequest, UpdateAbsenceRequest},
    },
    assessments::{
        entities::Assessment,
        requests::{AssessmentListParams, CreateAssessmentRequest, UpdateAssessmentRequest},
    },
    classes::{
        entities::Class,
        requests::{ClassListParams, CreateClassRequest, UpdateClassRequest},
    },
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest},
    },
    curriculum::{
        entities::{Course, Module, Subject},
        requests::{
            CourseListParams, CreateCourseRequest, CreateModuleRequest, CreateSubjectRequest,
            ModuleListParams, SubjectListParams, UpdateCourseRequest, UpdateModuleRequest,
            UpdateSubjectRequest,
        },
    },
    dashboard::responses::EntityCounts,
    finance::{
        entities::FinancialLog,
        requests::{
            CreateFinancialLogRequest, FinanceSummaryParams, FinancialLogListParams,
            UpdateFinancialLogRequest,
        },
        responses::FinanceSummary,
    },
    quran_logs::{
        entities::QuranLog,
        requests::{CreateQuranLogRequest, QuranLogListParams, UpdateQuranLogRequest},
    },
    results::{
        entities::AssessmentResult,
        requests::{BulkResultRequest, CreateResultRequest, ResultListParams, UpdateResultRequest},
        responses::BulkSaveOutcome,
    },
    rosters::{
        entities::Roster,
        requests::{CreateRosterRequest, RosterFilters, RosterListParams, UpdateRosterRequest},
    },
    school_years::{
        entities::SchoolYear,
        requests::{CreateSchoolYearRequest, SchoolYearListParams, UpdateSchoolYearRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    },
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait UserStorage: Send + Sync {
    // 创建用户，password 字段需为哈希后的值
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(
        &self,
        query: UserListParams,
    ) -> Result<PaginatedResponse<User>>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户，关联的教师/学生档案保留但解除账号关联
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;
}

#[async_trait::async_trait]
pub trait TeacherStorage: Send + Sync {
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<PaginatedResponse<Teacher>>;
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait StudentStorage: Send + Sync {
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<PaginatedResponse<Student>>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 分班；class_id 为 None 时退班
    async fn set_student_enrollment(
        &self,
        id: i64,
        class_id: Option<i64>,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait CurriculumStorage: Send + Sync {
    // 课程
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<PaginatedResponse<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    // 模块
    async fn create_module(&self, req: CreateModuleRequest) -> Result<Module>;
    async fn get_module_by_id(&self, id: i64) -> Result<Option<Module>>;
    async fn list_modules_with_pagination(
        &self,
        query: ModuleListParams,
    ) -> Result<PaginatedResponse<Module>>;
    async fn update_module(&self, id: i64, update: UpdateModuleRequest) -> Result<Option<Module>>;
    async fn delete_module(&self, id: i64) -> Result<bool>;

    // 科目
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>>;
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait SchoolYearStorage: Send + Sync {
    async fn create_school_year(&self, req: CreateSchoolYearRequest) -> Result<SchoolYear>;
    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>>;
    async fn get_active_school_year(&self) -> Result<Option<SchoolYear>>;
    async fn list_school_years_with_pagination(
        &self,
        query: SchoolYearListParams,
    ) -> Result<PaginatedResponse<SchoolYear>>;
    async fn update_school_year(
        &self,
        id: i64,
        update: UpdateSchoolYearRequest,
    ) -> Result<Option<SchoolYear>>;
    async fn delete_school_year(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ClassStorage: Send + Sync {
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(
        &self,
        query: ClassListParams,
    ) -> Result<PaginatedResponse<Class>>;
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    async fn delete_class(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ClassroomStorage: Send + Sync {
    async fn create_classroom(&self, req: CreateClassroomRequest) -> Result<Classroom>;
    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>>;
    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListParams,
    ) -> Result<PaginatedResponse<Classroom>>;
    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait RosterStorage: Send + Sync {
    async fn create_roster(&self, req: CreateRosterRequest) -> Result<Roster>;
    async fn get_roster_by_id(&self, id: i64) -> Result<Option<Roster>>;
    async fn list_rosters_with_pagination(
        &self,
        query: RosterListParams,
    ) -> Result<PaginatedResponse<Roster>>;
    // 日历视图需要全部匹配的排课，不分页
    async fn list_rosters(&self, filters: RosterFilters) -> Result<Vec<Roster>>;
    async fn update_roster(&self, id: i64, update: UpdateRosterRequest) -> Result<Option<Roster>>;
    // 拖拽后写回星期与起止时间
    async fn move_roster(&self, id: i64, slot: WeeklySlot) -> Result<Option<Roster>>;
    async fn delete_roster(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait AbsenceStorage: Send + Sync {
    async fn create_absence(
        &self,
        req: CreateAbsenceRequest,
        recorded_by: Option<i64>,
    ) -> Result<Absence>;
    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>>;
    async fn list_absences_with_pagination(
        &self,
        query: AbsenceListParams,
    ) -> Result<PaginatedResponse<Absence>>;
    async fn update_absence(&self, id: i64, update: UpdateAbsenceRequest)
    -> Result<Option<Absence>>;
    async fn delete_absence(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait AssessmentStorage: Send + Sync {
    async fn create_assessment(&self, req: CreateAssessmentRequest) -> Result<Assessment>;
    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>>;
    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListParams,
    ) -> Result<PaginatedResponse<Assessment>>;
    async fn update_assessment(
        &self,
        id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>>;
    async fn delete_assessment(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ResultStorage: Send + Sync {
    async fn create_result(&self, req: CreateResultRequest) -> Result<AssessmentResult>;
    async fn get_result_by_id(&self, id: i64) -> Result<Option<AssessmentResult>>;
    async fn list_results_with_pagination(
        &self,
        query: ResultListParams,
    ) -> Result<PaginatedResponse<AssessmentResult>>;
    async fn update_result(
        &self,
        id: i64,
        update: UpdateResultRequest,
    ) -> Result<Option<AssessmentResult>>;
    async fn delete_result(&self, id: i64) -> Result<bool>;
    // 整张成绩单：先校验全部行，再在一个事务内按 (assessment_id, student_id) 写入
    async fn save_results_bulk(&self, req: BulkResultRequest) -> Result<BulkSaveOutcome>;
}

#[async_trait::async_trait]
pub trait FinanceStorage: Send + Sync {
    async fn create_financial_log(&self, req: CreateFinancialLogRequest) -> Result<FinancialLog>;
    async fn get_financial_log_by_id(&self, id: i64) -> Result<Option<FinancialLog>>;
    async fn list_financial_logs_with_pagination(
        &self,
        query: FinancialLogListParams,
    ) -> Result<PaginatedResponse<FinancialLog>>;
    async fn update_financial_log(
        &self,
        id: i64,
        update: UpdateFinancialLogRequest,
    ) -> Result<Option<FinancialLog>>;
    async fn delete_financial_log(&self, id: i64) -> Result<bool>;
    async fn finance_summary(&self, params: FinanceSummaryParams) -> Result<FinanceSummary>;
}

#[async_trait::async_trait]
pub trait QuranLogStorage: Send + Sync {
    async fn create_quran_log(&self, req: CreateQuranLogRequest) -> Result<QuranLog>;
    async fn get_quran_log_by_id(&self, id: i64) -> Result<Option<QuranLog>>;
    async fn list_quran_logs_with_pagination(
        &self,
        query: QuranLogListParams,
    ) -> Result<PaginatedResponse<QuranLog>>;
    async fn update_quran_log(
        &self,
        id: i64,
        update: UpdateQuranLogRequest,
    ) -> Result<Option<QuranLog>>;
    async fn delete_quran_log(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait DashboardStorage: Send + Sync {
    async fn entity_counts(&self) -> Result<EntityCounts>;
}

/// 服务层使用的完整存储接口
pub trait Storage:
    UserStorage
    + TeacherStorage
    + StudentStorage
    + CurriculumStorage
    + SchoolYearStorage
    + ClassStorage
    + ClassroomStorage
    + RosterStorage
    + AbsenceStorage
    + AssessmentStorage
    + ResultStorage
    + FinanceStorage
    + QuranLogStorage
    + DashboardStorage
{
}

impl<T> Storage for T where
    T: UserStorage
        + TeacherStorage
        + StudentStorage
        + CurriculumStorage
        + SchoolYearStorage
        + ClassStorage
        + ClassroomStorage
        + RosterStorage
        + AbsenceStorage
        + AssessmentStorage
        + ResultStorage
        + FinanceStorage
        + QuranLogStorage
        + DashboardStorage
{
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
