use super::{SeaOrmStorage, now_ts, search_term};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::entity::{students, teachers};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    users::{
        entities::{User, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    },
};
use crate::storage::UserStorage;
use crate::utils::sql::contains_any;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

#[async_trait::async_trait]
impl UserStorage for SeaOrmStorage {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        let now = now_ts();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create user"))?;

        Ok(result.into_user())
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query user"))?;

        Ok(result.map(|m| m.into_user()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err("query user"))?;

        Ok(result.map(|m| m.into_user()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err("query user"))?;

        Ok(result.map(|m| m.into_user()))
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(db_err("query user"))?;

        Ok(result.map(|m| m.into_user()))
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListParams,
    ) -> Result<PaginatedResponse<User>> {
        let mut select = Users::find();

        // 搜索条件
        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(
                &[Column::Username, Column::Email, Column::DisplayName],
                &term,
            ));
        }

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        self.fetch_page(select, &query.pagination, |m| m.into_user(), "list users")
            .await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        // 先检查用户是否存在
        if self.get_user_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(display_name) = update.display_name {
            model.display_name = Set(Some(display_name));
        }

        model.update(&self.db).await.map_err(db_err("update user"))?;

        self.get_user_by_id(id).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete user"))?;

        // 教师/学生档案保留，只解除与账号的关联
        teachers::Entity::update_many()
            .col_expr(teachers::Column::UserId, Expr::value(Option::<i64>::None))
            .filter(teachers::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("unlink teacher profile"))?;
        students::Entity::update_many()
            .col_expr(students::Column::UserId, Expr::value(Option::<i64>::None))
            .filter(students::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("unlink student profile"))?;

        let result = Users::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete user"))?;

        txn.commit().await.map_err(db_err("delete user"))?;
        Ok(result.rows_affected > 0)
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::LastLogin, Expr::value(now_ts()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("update last login"))?;

        Ok(result.rows_affected > 0)
    }

    async fn count_users(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(db_err("count users"))
    }
}
