use async_trait::async_trait;
use common::pagination::Page;
use models::cabinet::{self, NewCabinet};
use models::student::{self, CabinetRef};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::errors::ServiceError;

#[async_trait]
pub trait CabinetRepository: Send + Sync {
    /// Insert; a unique violation surfaces as `ServiceError::Conflict`.
    async fn insert(&self, input: &NewCabinet) -> Result<cabinet::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<cabinet::Model>, ServiceError>;
    /// Cabinets in insertion order.
    async fn list(&self, page: Page) -> Result<Vec<cabinet::Model>, ServiceError>;
    /// True when any cabinet already uses `name` or `number`.
    async fn exists_by_unique(&self, name: &str, number: i32) -> Result<bool, ServiceError>;
    /// Students of the given cabinets, one query, ordered by id.
    async fn students_of(&self, cabinet_ids: &[i32]) -> Result<Vec<student::Model>, ServiceError>;
    /// Resolve the cabinet and insert the student in one transaction.
    async fn insert_student(&self, full_name: &str, cabinet: &CabinetRef) -> Result<(student::Model, cabinet::Model), ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCabinetRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCabinetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn find_by_ref<C: ConnectionTrait>(db: &C, cabinet: &CabinetRef) -> Result<Option<cabinet::Model>, ServiceError> {
    let query = match cabinet {
        CabinetRef::Name(name) => cabinet::Entity::find().filter(cabinet::Column::Name.eq(name.as_str())),
        CabinetRef::Number(number) => match i32::try_from(*number) {
            Ok(n) => cabinet::Entity::find().filter(cabinet::Column::Number.eq(n)),
            Err(_) => return Ok(None),
        },
    };
    Ok(query.one(db).await?)
}

#[async_trait]
impl CabinetRepository for SeaOrmCabinetRepository {
    async fn insert(&self, input: &NewCabinet) -> Result<cabinet::Model, ServiceError> {
        Ok(cabinet::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<cabinet::Model>, ServiceError> {
        Ok(cabinet::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn list(&self, page: Page) -> Result<Vec<cabinet::Model>, ServiceError> {
        let rows = cabinet::Entity::find()
            .order_by_asc(cabinet::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn exists_by_unique(&self, name: &str, number: i32) -> Result<bool, ServiceError> {
        let found = cabinet::Entity::find()
            .filter(
                Condition::any()
                    .add(cabinet::Column::Name.eq(name))
                    .add(cabinet::Column::Number.eq(number)),
            )
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn students_of(&self, cabinet_ids: &[i32]) -> Result<Vec<student::Model>, ServiceError> {
        if cabinet_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = student::Entity::find()
            .filter(student::Column::CabinetId.is_in(cabinet_ids.iter().copied()))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert_student(&self, full_name: &str, cabinet: &CabinetRef) -> Result<(student::Model, cabinet::Model), ServiceError> {
        let txn = self.db.begin().await?;
        let cab = find_by_ref(&txn, cabinet).await?.ok_or_else(|| match cabinet {
            CabinetRef::Name(name) => ServiceError::NotFound(format!("cabinet with name '{name}' not found")),
            CabinetRef::Number(number) => ServiceError::NotFound(format!("cabinet with number {number} not found")),
        })?;
        let created = student::insert(&txn, full_name, cab.id).await?;
        txn.commit().await?;
        Ok((created, cab))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = cabinet::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
