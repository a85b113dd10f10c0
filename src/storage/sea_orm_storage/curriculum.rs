//! 课程、模块、科目存储操作

use super::{SeaOrmStorage, now_ts, purge_assessments, purge_rosters, search_term};
use crate::entity::{assessments, classes, courses, modules, rosters, subjects};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    curriculum::{
        entities::{Course, Module, Subject},
        requests::{
            CourseListParams, CreateCourseRequest, CreateModuleRequest, CreateSubjectRequest,
            ModuleListParams, SubjectListParams, UpdateCourseRequest, UpdateModuleRequest,
            UpdateSubjectRequest,
        },
    },
};
use crate::storage::CurriculumStorage;
use crate::utils::sql::contains_any;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};

#[async_trait::async_trait]
impl CurriculumStorage for SeaOrmStorage {
    async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = now_ts();

        let model = courses::ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create course"))?;

        Ok(result.into_course())
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        let result = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query course"))?;

        Ok(result.map(|m| m.into_course()))
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<PaginatedResponse<Course>> {
        let mut select = courses::Entity::find();

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(
                &[courses::Column::Name, courses::Column::Description],
                &term,
            ));
        }

        select = select.order_by_asc(courses::Column::Name);

        self.fetch_page(select, &query.pagination, |m| m.into_course(), "list courses")
            .await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        if self.get_course_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = courses::ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&self.db).await.map_err(db_err("update course"))?;

        self.get_course_by_id(id).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete course"))?;

        let module_ids: Vec<i64> = modules::Entity::find()
            .select_only()
            .column(modules::Column::Id)
            .filter(modules::Column::CourseId.eq(id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_err("query course modules"))?;

        if !module_ids.is_empty() {
            // 科目保留，只脱离被删除的模块
            subjects::Entity::update_many()
                .col_expr(subjects::Column::ModuleId, Expr::value(Option::<i64>::None))
                .filter(subjects::Column::ModuleId.is_in(module_ids.clone()))
                .exec(&txn)
                .await
                .map_err(db_err("detach subjects"))?;
            modules::Entity::delete_many()
                .filter(modules::Column::Id.is_in(module_ids))
                .exec(&txn)
                .await
                .map_err(db_err("delete course modules"))?;
        }

        classes::Entity::update_many()
            .col_expr(classes::Column::CourseId, Expr::value(Option::<i64>::None))
            .filter(classes::Column::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("detach classes"))?;

        let result = courses::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete course"))?;

        txn.commit().await.map_err(db_err("delete course"))?;
        Ok(result.rows_affected > 0)
    }

    async fn create_module(&self, req: CreateModuleRequest) -> Result<Module> {
        let now = now_ts();

        let model = modules::ActiveModel {
            course_id: Set(req.course_id),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create module"))?;

        Ok(result.into_module())
    }

    async fn get_module_by_id(&self, id: i64) -> Result<Option<Module>> {
        let result = modules::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query module"))?;

        Ok(result.map(|m| m.into_module()))
    }

    async fn list_modules_with_pagination(
        &self,
        query: ModuleListParams,
    ) -> Result<PaginatedResponse<Module>> {
        let mut select = modules::Entity::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(modules::Column::CourseId.eq(course_id));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(&[modules::Column::Name], &term));
        }

        select = select.order_by_asc(modules::Column::Name);

        self.fetch_page(select, &query.pagination, |m| m.into_module(), "list modules")
            .await
    }

    async fn update_module(&self, id: i64, update: UpdateModuleRequest) -> Result<Option<Module>> {
        if self.get_module_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = modules::ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&self.db).await.map_err(db_err("update module"))?;

        self.get_module_by_id(id).await
    }

    async fn delete_module(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete module"))?;

        subjects::Entity::update_many()
            .col_expr(subjects::Column::ModuleId, Expr::value(Option::<i64>::None))
            .filter(subjects::Column::ModuleId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("detach subjects"))?;

        let result = modules::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete module"))?;

        txn.commit().await.map_err(db_err("delete module"))?;
        Ok(result.rows_affected > 0)
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = now_ts();

        let model = subjects::ActiveModel {
            module_id: Set(req.module_id),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create subject"))?;

        Ok(result.into_subject())
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        let result = subjects::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query subject"))?;

        Ok(result.map(|m| m.into_subject()))
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>> {
        let mut select = subjects::Entity::find();

        if let Some(module_id) = query.module_id {
            select = select.filter(subjects::Column::ModuleId.eq(module_id));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(
                &[subjects::Column::Name, subjects::Column::Description],
                &term,
            ));
        }

        select = select.order_by_asc(subjects::Column::Name);

        self.fetch_page(select, &query.pagination, |m| m.into_subject(), "list subjects")
            .await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = subjects::ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(module_id) = update.module_id {
            model.module_id = Set(module_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&self.db).await.map_err(db_err("update subject"))?;

        self.get_subject_by_id(id).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete subject"))?;

        purge_rosters(&txn, Condition::all().add(rosters::Column::SubjectId.eq(id)))
            .await
            .map_err(db_err("delete subject rosters"))?;
        purge_assessments(
            &txn,
            Condition::all().add(assessments::Column::SubjectId.eq(id)),
        )
        .await
        .map_err(db_err("delete subject assessments"))?;

        let result = subjects::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete subject"))?;

        txn.commit().await.map_err(db_err("delete subject"))?;
        Ok(result.rows_affected > 0)
    }
}
