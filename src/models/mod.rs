pub mod absences;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod classrooms;
pub mod common;
pub mod curriculum;
pub mod dashboard;
pub mod finance;
pub mod quran;
pub mod quran_logs;
pub mod results;
pub mod rosters;
pub mod school_years;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；1xxx 通用，2xxx 认证，3xxx 用户，4xxx 人员与教学结构，
/// 5xxx 排课与成绩，6xxx 财务，7xxx 古兰经记录。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    InternalServerError = 1004,
    RateLimitExceeded = 1005,
    ValidationFailed = 1006,
    AlreadyExists = 1007,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,
    RegisterRoleNotAllowed = 2002,

    // 用户
    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserNameInvalid = 3002,
    UserEmailInvalid = 3003,
    UserPasswordInvalid = 3004,
    UserNameAlreadyExists = 3005,
    UserEmailAlreadyExists = 3006,
    UserCreationFailed = 3007,
    UserUpdateFailed = 3008,
    UserDeleteFailed = 3009,
    CanNotDeleteCurrentUser = 3010,

    // 教师 / 学生
    TeacherNotFound = 4000,
    TeacherOperationFailed = 4001,
    StudentNotFound = 4100,
    StudentOperationFailed = 4101,

    // 课程 / 模块 / 科目
    CourseNotFound = 4200,
    ModuleNotFound = 4201,
    SubjectNotFound = 4202,
    CurriculumOperationFailed = 4203,

    // 学年
    SchoolYearNotFound = 4300,
    NoActiveSchoolYear = 4301,
    SchoolYearOperationFailed = 4302,

    // 班级 / 教室
    ClassNotFound = 4400,
    ClassOperationFailed = 4401,
    ClassroomNotFound = 4500,
    ClassroomOperationFailed = 4501,

    // 排课
    RosterNotFound = 5000,
    RosterOperationFailed = 5001,
    RosterTimeInvalid = 5002,

    // 缺勤
    AbsenceNotFound = 5100,
    AbsenceOperationFailed = 5101,
    AbsencePermissionDenied = 5102,

    // 考核 / 成绩
    AssessmentNotFound = 5200,
    AssessmentOperationFailed = 5201,
    ResultNotFound = 5300,
    ResultOperationFailed = 5301,
    ResultBulkInvalid = 5302,

    // 财务
    FinancialLogNotFound = 6000,
    FinanceOperationFailed = 6001,

    // 古兰经
    QuranPositionInvalid = 7000,
    QuranLogNotFound = 7001,
    QuranLogOperationFailed = 7002,
}
