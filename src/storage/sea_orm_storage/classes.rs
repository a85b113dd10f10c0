//! 班级存储操作

use super::{SeaOrmStorage, now_ts, purge_assessments, purge_rosters, search_term};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::{assessments, rosters, students};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    classes::{
        entities::Class,
        requests::{ClassListParams, CreateClassRequest, UpdateClassRequest},
    },
};
use crate::storage::ClassStorage;
use crate::utils::sql::contains_any;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 一个教师只担任一个班的班主任：把他从其它班级上撤下
async fn release_mentor<C: ConnectionTrait>(
    conn: &C,
    mentor_id: i64,
    keep_class: Option<i64>,
) -> std::result::Result<(), DbErr> {
    let mut update = Classes::update_many()
        .col_expr(Column::MentorId, Expr::value(Option::<i64>::None))
        .filter(Column::MentorId.eq(mentor_id));
    if let Some(class_id) = keep_class {
        update = update.filter(Column::Id.ne(class_id));
    }
    update.exec(conn).await?;
    Ok(())
}

#[async_trait::async_trait]
impl ClassStorage for SeaOrmStorage {
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        let now = now_ts();
        let txn = self.db.begin().await.map_err(db_err("create class"))?;

        if let Some(mentor_id) = req.mentor_id {
            release_mentor(&txn, mentor_id, None)
                .await
                .map_err(db_err("release mentor"))?;
        }

        let model = ActiveModel {
            name: Set(req.name),
            course_id: Set(req.course_id),
            mentor_id: Set(req.mentor_id),
            school_year_id: Set(req.school_year_id),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("create class"))?;

        txn.commit().await.map_err(db_err("create class"))?;
        Ok(result.into_class())
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query class"))?;

        Ok(result.map(|m| m.into_class()))
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListParams,
    ) -> Result<PaginatedResponse<Class>> {
        let mut select = Classes::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(mentor_id) = query.mentor_id {
            select = select.filter(Column::MentorId.eq(mentor_id));
        }
        if let Some(school_year_id) = query.school_year_id {
            select = select.filter(Column::SchoolYearId.eq(school_year_id));
        }
        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(&[Column::Name, Column::Description], &term));
        }

        select = select.order_by_asc(Column::Name);

        self.fetch_page(select, &query.pagination, |m| m.into_class(), "list classes")
            .await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        if self.get_class_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let txn = self.db.begin().await.map_err(db_err("update class"))?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(course_id) = update.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(mentor_id) = update.mentor_id {
            if let Some(teacher_id) = mentor_id {
                release_mentor(&txn, teacher_id, Some(id))
                    .await
                    .map_err(db_err("release mentor"))?;
            }
            model.mentor_id = Set(mentor_id);
        }
        if let Some(school_year_id) = update.school_year_id {
            model.school_year_id = Set(school_year_id);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model.update(&txn).await.map_err(db_err("update class"))?;
        txn.commit().await.map_err(db_err("update class"))?;

        self.get_class_by_id(id).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete class"))?;

        purge_rosters(&txn, Condition::all().add(rosters::Column::ClassId.eq(id)))
            .await
            .map_err(db_err("delete class rosters"))?;
        purge_assessments(&txn, Condition::all().add(assessments::Column::ClassId.eq(id)))
            .await
            .map_err(db_err("delete class assessments"))?;
        // 学生退班
        students::Entity::update_many()
            .col_expr(students::Column::ClassId, Expr::value(Option::<i64>::None))
            .col_expr(students::Column::EnrolledAt, Expr::value(Option::<i64>::None))
            .filter(students::Column::ClassId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("unenroll students"))?;

        let result = Classes::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete class"))?;

        txn.commit().await.map_err(db_err("delete class"))?;
        Ok(result.rows_affected > 0)
    }
}
