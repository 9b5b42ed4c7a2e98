//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::Property;
use estate_core::traits::{NewProperty, PropertyRepository, RepoResult};

use crate::models::PropertyModel;

use super::error::{map_db_error, property_not_found};

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Property>> {
        let results = sqlx::query_as::<_, PropertyModel>(
            r"
            SELECT id, title, description, price, address, img, status,
                   created_at, updated_at
            FROM properties
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Property::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(
            r"
            SELECT id, title, description, price, address, img, status,
                   created_at, updated_at
            FROM properties
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Property::try_from).transpose()
    }

    #[instrument(skip(self, property))]
    async fn create(&self, property: &NewProperty) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO properties (title, description, price, address, img, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&property.title)
        .bind(&property.description)
        .bind(property.price)
        .bind(&property.address)
        .bind(&property.img)
        .bind(property.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, property))]
    async fn update(&self, property: &Property) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE properties
            SET title = $2, description = $3, price = $4, address = $5, img = $6,
                status = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(property.id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(property.price)
        .bind(&property.address)
        .bind(&property.img)
        .bind(property.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(property.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(id));
        }

        Ok(())
    }
}
