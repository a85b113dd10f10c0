//! 成绩存储操作

use std::collections::HashSet;

use super::{SeaOrmStorage, now_ts};
use crate::entity::results::{ActiveModel, Column, Entity as Results};
use crate::entity::{assessments, students};
use crate::errors::{Result, SchoolAdminError, db_err};
use crate::models::{
    PaginatedResponse,
    results::{
        entities::AssessmentResult,
        requests::{
            BulkResultRequest, CreateResultRequest, ResultListParams, UpdateResultRequest,
            check_score,
        },
        responses::{BulkResultError, BulkSaveOutcome},
    },
};
use crate::storage::ResultStorage;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    async fn assessment_max_score(&self, assessment_id: i64) -> Result<Option<f64>> {
        let max_score: Option<f64> = assessments::Entity::find_by_id(assessment_id)
            .select_only()
            .column(assessments::Column::MaxScore)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err("query assessment"))?;

        Ok(max_score)
    }
}

#[async_trait::async_trait]
impl ResultStorage for SeaOrmStorage {
    async fn create_result(&self, req: CreateResultRequest) -> Result<AssessmentResult> {
        let Some(max_score) = self.assessment_max_score(req.assessment_id).await? else {
            return Err(SchoolAdminError::validation(format!(
                "Assessment {} does not exist",
                req.assessment_id
            )));
        };
        check_score(req.score, max_score)?;

        let now = now_ts();
        let model = ActiveModel {
            assessment_id: Set(req.assessment_id),
            student_id: Set(req.student_id),
            score: Set(req.score),
            comment: Set(req.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create result"))?;

        Ok(result.into_result())
    }

    async fn get_result_by_id(&self, id: i64) -> Result<Option<AssessmentResult>> {
        let result = Results::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query result"))?;

        Ok(result.map(|m| m.into_result()))
    }

    async fn list_results_with_pagination(
        &self,
        query: ResultListParams,
    ) -> Result<PaginatedResponse<AssessmentResult>> {
        let mut select = Results::find();

        if let Some(assessment_id) = query.assessment_id {
            select = select.filter(Column::AssessmentId.eq(assessment_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        select = select
            .order_by_asc(Column::AssessmentId)
            .order_by_asc(Column::StudentId);

        self.fetch_page(select, &query.pagination, |m| m.into_result(), "list results")
            .await
    }

    async fn update_result(
        &self,
        id: i64,
        update: UpdateResultRequest,
    ) -> Result<Option<AssessmentResult>> {
        let Some(existing) = self.get_result_by_id(id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(score) = update.score {
            if let Some(max_score) = self.assessment_max_score(existing.assessment_id).await? {
                check_score(score, max_score)?;
            }
            model.score = Set(score);
        }
        if let Some(comment) = update.comment {
            model.comment = Set(Some(comment));
        }

        model.update(&self.db).await.map_err(db_err("update result"))?;

        self.get_result_by_id(id).await
    }

    async fn delete_result(&self, id: i64) -> Result<bool> {
        let result = Results::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete result"))?;

        Ok(result.rows_affected > 0)
    }

    async fn save_results_bulk(&self, req: BulkResultRequest) -> Result<BulkSaveOutcome> {
        let Some(max_score) = self.assessment_max_score(req.assessment_id).await? else {
            return Err(SchoolAdminError::not_found(format!(
                "Assessment {} not found",
                req.assessment_id
            )));
        };

        // 第一轮：只校验，不写入
        let requested: Vec<i64> = req.entries.iter().map(|e| e.student_id).collect();
        let known: HashSet<i64> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::Id.is_in(requested))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(db_err("query students"))?
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        for (index, entry) in req.entries.iter().enumerate() {
            let problem = if !known.contains(&entry.student_id) {
                Some(format!("Student {} does not exist", entry.student_id))
            } else if !seen.insert(entry.student_id) {
                Some(format!(
                    "Student {} appears more than once",
                    entry.student_id
                ))
            } else {
                check_score(entry.score, max_score)
                    .err()
                    .map(|e| e.message().to_string())
            };

            if let Some(message) = problem {
                return Ok(BulkSaveOutcome::Rejected(BulkResultError {
                    index,
                    student_id: entry.student_id,
                    message,
                }));
            }
        }

        // 第二轮：同一事务内按 (assessment_id, student_id) 写入
        let now = now_ts();
        let txn = self.db.begin().await.map_err(db_err("save results"))?;
        let mut saved = Vec::with_capacity(req.entries.len());

        for entry in req.entries {
            let existing = Results::find()
                .filter(Column::AssessmentId.eq(req.assessment_id))
                .filter(Column::StudentId.eq(entry.student_id))
                .one(&txn)
                .await
                .map_err(db_err("query result"))?;

            let model = match existing {
                Some(row) => ActiveModel {
                    id: Set(row.id),
                    score: Set(entry.score),
                    comment: Set(entry.comment),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .update(&txn)
                .await
                .map_err(db_err("update result"))?,
                None => ActiveModel {
                    assessment_id: Set(req.assessment_id),
                    student_id: Set(entry.student_id),
                    score: Set(entry.score),
                    comment: Set(entry.comment),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_err("create result"))?,
            };
            saved.push(model.into_result());
        }

        txn.commit().await.map_err(db_err("save results"))?;
        Ok(BulkSaveOutcome::Saved(saved))
    }
}
