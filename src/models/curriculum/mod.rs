//! 课程体系：课程 -> 模块 -> 科目

pub mod entities;
pub mod requests;
