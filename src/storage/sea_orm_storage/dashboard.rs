use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::errors::{Result, db_err};
use crate::models::dashboard::responses::EntityCounts;
use crate::storage::DashboardStorage;
use sea_orm::{EntityTrait, PaginatorTrait};

#[async_trait::async_trait]
impl DashboardStorage for SeaOrmStorage {
    async fn entity_counts(&self) -> Result<EntityCounts> {
        let err = || db_err("count records");

        Ok(EntityCounts {
            students: Students::find().count(&self.db).await.map_err(err())?,
            teachers: Teachers::find().count(&self.db).await.map_err(err())?,
            classes: Classes::find().count(&self.db).await.map_err(err())?,
            classrooms: Classrooms::find().count(&self.db).await.map_err(err())?,
            subjects: Subjects::find().count(&self.db).await.map_err(err())?,
            rosters: Rosters::find().count(&self.db).await.map_err(err())?,
            assessments: Assessments::find().count(&self.db).await.map_err(err())?,
        })
    }
}
