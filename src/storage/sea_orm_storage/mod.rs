//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 父记录删除时的级联在这里手动完成，每次级联都在同一个事务内。

mod absences;
mod assessments;
mod classes;
mod classrooms;
mod curriculum;
mod dashboard;
mod finance;
mod quran_logs;
mod results;
mod rosters;
mod school_years;
mod students;
mod teachers;
mod users;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::entity;
use crate::errors::{Result, SchoolAdminError, db_err};
use crate::models::{PaginatedResponse, PaginationInfo, PaginationQuery};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Select,
};
use std::time::Duration;
use tracing::info;
use ts_rs::TS;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    ///
    /// 内存数据库每个连接各自独立，因此只保留一个常驻连接。
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 按分页参数取一页并转换为业务模型
    pub(crate) async fn fetch_page<E, T, F>(
        &self,
        select: Select<E>,
        pagination: &PaginationQuery,
        convert: F,
        context: &'static str,
    ) -> Result<PaginatedResponse<T>>
    where
        E: EntityTrait,
        E::Model: Send + Sync + 'static,
        T: TS + Send,
        F: Fn(E::Model) -> T + Send,
    {
        let (page, size) = pagination.normalized();

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(db_err(context))?;
        let pages = paginator.num_pages().await.map_err(db_err(context))?;
        let models = paginator.fetch_page(page - 1).await.map_err(db_err(context))?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(convert).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}

/// 当前 Unix 时间戳（秒）
pub(crate) fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

/// 删除满足条件的排课及其缺勤记录，返回删除的排课数
pub(crate) async fn purge_rosters(
    txn: &DatabaseTransaction,
    condition: Condition,
) -> std::result::Result<u64, DbErr> {
    let roster_ids: Vec<i64> = entity::rosters::Entity::find()
        .select_only()
        .column(entity::rosters::Column::Id)
        .filter(condition)
        .into_tuple()
        .all(txn)
        .await?;
    if roster_ids.is_empty() {
        return Ok(0);
    }

    entity::absences::Entity::delete_many()
        .filter(entity::absences::Column::RosterId.is_in(roster_ids.clone()))
        .exec(txn)
        .await?;
    let deleted = entity::rosters::Entity::delete_many()
        .filter(entity::rosters::Column::Id.is_in(roster_ids))
        .exec(txn)
        .await?;
    Ok(deleted.rows_affected)
}

/// 删除满足条件的考核及其成绩，返回删除的考核数
pub(crate) async fn purge_assessments(
    txn: &DatabaseTransaction,
    condition: Condition,
) -> std::result::Result<u64, DbErr> {
    let assessment_ids: Vec<i64> = entity::assessments::Entity::find()
        .select_only()
        .column(entity::assessments::Column::Id)
        .filter(condition)
        .into_tuple()
        .all(txn)
        .await?;
    if assessment_ids.is_empty() {
        return Ok(0);
    }

    entity::results::Entity::delete_many()
        .filter(entity::results::Column::AssessmentId.is_in(assessment_ids.clone()))
        .exec(txn)
        .await?;
    let deleted = entity::assessments::Entity::delete_many()
        .filter(entity::assessments::Column::Id.is_in(assessment_ids))
        .exec(txn)
        .await?;
    Ok(deleted.rows_affected)
}

#[cfg(test)]
impl SeaOrmStorage {
    /// 测试用内存库；单连接保证所有查询落在同一个库上
    pub(crate) async fn in_memory() -> Self {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .expect("in-memory database")
    }
}

/// 搜索关键字：去掉空白后为空则视为未提供
pub(crate) fn search_term(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(crate::utils::escape_like_pattern)
}
