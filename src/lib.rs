//! School Admin - 学校教务管理后端服务
//!
//! 基于 Actix Web 构建，覆盖师生档案、课程体系、学年与班级、排课日历、
//! 缺勤、测评成绩、财务流水以及古兰经背诵记录。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `calendar`: 排课时间段与日历事件的换算
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、授权与限流中间件
//! - `models`: 数据模型定义
//! - `quran`: 章 / 节 / hizb 索引
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod calendar;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod quran;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
