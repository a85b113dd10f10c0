//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod absences;
pub mod assessments;
pub mod classes;
pub mod classrooms;
pub mod courses;
pub mod financial_logs;
pub mod modules;
pub mod quran_logs;
pub mod results;
pub mod rosters;
pub mod school_years;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
