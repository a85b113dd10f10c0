//! 预导入模块，方便使用

pub use super::absences::{
    ActiveModel as AbsenceActiveModel, Entity as Absences, Model as AbsenceModel,
};
pub use super::assessments::{
    ActiveModel as AssessmentActiveModel, Entity as Assessments, Model as AssessmentModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::financial_logs::{
    ActiveModel as FinancialLogActiveModel, Entity as FinancialLogs, Model as FinancialLogModel,
};
pub use super::modules::{
    ActiveModel as ModuleActiveModel, Entity as Modules, Model as ModuleModel,
};
pub use super::quran_logs::{
    ActiveModel as QuranLogActiveModel, Entity as QuranLogs, Model as QuranLogModel,
};
pub use super::results::{
    ActiveModel as ResultActiveModel, Entity as Results, Model as ResultModel,
};
pub use super::rosters::{
    ActiveModel as RosterActiveModel, Entity as Rosters, Model as RosterModel,
};
pub use super::school_years::{
    ActiveModel as SchoolYearActiveModel, Entity as SchoolYears, Model as SchoolYearModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
