//! 财务流水存储操作

use super::{SeaOrmStorage, now_ts};
use crate::entity::financial_logs::{ActiveModel, Column, Entity as FinancialLogs};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    finance::{
        entities::{FinanceKind, FinancialLog},
        requests::{
            CreateFinancialLogRequest, FinanceSummaryParams, FinancialLogListParams,
            UpdateFinancialLogRequest,
        },
        responses::FinanceSummary,
    },
};
use crate::storage::FinanceStorage;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[async_trait::async_trait]
impl FinanceStorage for SeaOrmStorage {
    async fn create_financial_log(&self, req: CreateFinancialLogRequest) -> Result<FinancialLog> {
        let now = now_ts();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            kind: Set(req.kind.to_string()),
            category: Set(req.category),
            amount_cents: Set(req.amount_cents),
            description: Set(req.description),
            date: Set(req.date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("create financial log"))?;

        Ok(result.into_financial_log())
    }

    async fn get_financial_log_by_id(&self, id: i64) -> Result<Option<FinancialLog>> {
        let result = FinancialLogs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query financial log"))?;

        Ok(result.map(|m| m.into_financial_log()))
    }

    async fn list_financial_logs_with_pagination(
        &self,
        query: FinancialLogListParams,
    ) -> Result<PaginatedResponse<FinancialLog>> {
        let mut select = FinancialLogs::find();

        if let Some(kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }
        if let Some(category) = query.category.as_deref().map(str::trim)
            && !category.is_empty()
        {
            select = select.filter(Column::Category.eq(category));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from));
        }
        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt);

        self.fetch_page(
            select,
            &query.pagination,
            |m| m.into_financial_log(),
            "list financial logs",
        )
        .await
    }

    async fn update_financial_log(
        &self,
        id: i64,
        update: UpdateFinancialLogRequest,
    ) -> Result<Option<FinancialLog>> {
        if self.get_financial_log_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(kind) = update.kind {
            model.kind = Set(kind.to_string());
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(amount_cents) = update.amount_cents {
            model.amount_cents = Set(amount_cents);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }

        model
            .update(&self.db)
            .await
            .map_err(db_err("update financial log"))?;

        self.get_financial_log_by_id(id).await
    }

    async fn delete_financial_log(&self, id: i64) -> Result<bool> {
        let result = FinancialLogs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete financial log"))?;

        Ok(result.rows_affected > 0)
    }

    async fn finance_summary(&self, params: FinanceSummaryParams) -> Result<FinanceSummary> {
        let mut select = FinancialLogs::find()
            .select_only()
            .column(Column::Kind)
            .column(Column::AmountCents);

        if let Some(from) = params.from {
            select = select.filter(Column::Date.gte(from));
        }
        if let Some(to) = params.to {
            select = select.filter(Column::Date.lte(to));
        }

        let rows: Vec<(String, i64)> = select
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err("summarize finance"))?;

        let mut summary = FinanceSummary {
            from: params.from,
            to: params.to,
            ..Default::default()
        };
        for (kind, amount) in rows {
            match kind.parse::<FinanceKind>() {
                Ok(FinanceKind::Income) => summary.income_cents += amount,
                Ok(FinanceKind::Expense) => summary.expense_cents += amount,
                Err(_) => tracing::warn!("Skipping financial log with unknown kind: {}", kind),
            }
        }
        summary.balance_cents = summary.income_cents - summary.expense_cents;

        Ok(summary)
    }
}
