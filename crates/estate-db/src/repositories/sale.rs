//! PostgreSQL implementation of SaleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::SaleBooking;
use estate_core::traits::{NewBooking, RepoResult, SaleRepository};

use crate::models::SaleBookingModel;

use super::error::{booking_not_found, map_db_error};

/// PostgreSQL implementation of SaleRepository
#[derive(Clone)]
pub struct PgSaleRepository {
    pool: PgPool,
}

impl PgSaleRepository {
    /// Create a new PgSaleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for PgSaleRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<SaleBooking>> {
        let results = sqlx::query_as::<_, SaleBookingModel>(
            r"
            SELECT id, property_id, client_name, client_email, client_number,
                   amount, booking_date, status, created_at, updated_at
            FROM sale_bookings
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(SaleBooking::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SaleBooking>> {
        let result = sqlx::query_as::<_, SaleBookingModel>(
            r"
            SELECT id, property_id, client_name, client_email, client_number,
                   amount, booking_date, status, created_at, updated_at
            FROM sale_bookings
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SaleBooking::try_from).transpose()
    }

    #[instrument(skip(self, booking))]
    async fn create(&self, booking: &NewBooking) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO sale_bookings
                (property_id, client_name, client_email, client_number, amount,
                 booking_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(booking.property_id)
        .bind(&booking.client_name)
        .bind(&booking.client_email)
        .bind(&booking.client_number)
        .bind(booking.amount)
        .bind(booking.booking_date)
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, booking))]
    async fn update(&self, booking: &SaleBooking) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sale_bookings
            SET property_id = $2, client_name = $3, client_email = $4,
                client_number = $5, amount = $6, booking_date = $7, status = $8,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(booking.id)
        .bind(booking.property_id)
        .bind(&booking.client_name)
        .bind(&booking.client_email)
        .bind(&booking.client_number)
        .bind(booking.amount)
        .bind(booking.booking_date)
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(booking.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM sale_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(id));
        }

        Ok(())
    }
}
