//! Sale booking service

use std::str::FromStr;

use estate_core::entities::SaleBooking;
use estate_core::error::DomainError;
use estate_core::traits::NewBooking;
use estate_core::value_objects::BookingStatus;
use tracing::{info, instrument};

use crate::dto::{CreateBookingRequest, UpdateBookingRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Sale booking management service
pub struct SaleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SaleService<'a> {
    /// Create a new SaleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all bookings
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SaleBooking>> {
        Ok(self.ctx.sale_repo().find_all().await?)
    }

    /// Get a single booking
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<SaleBooking> {
        self.ctx
            .sale_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::BookingNotFound(id)))
    }

    /// Create a new booking. A referenced property must exist.
    #[instrument(skip(self, request), fields(client = %request.client_name))]
    pub async fn create(&self, request: CreateBookingRequest) -> ServiceResult<SaleBooking> {
        if let Some(property_id) = request.property_id {
            if self
                .ctx
                .property_repo()
                .find_by_id(property_id)
                .await?
                .is_none()
            {
                return Err(ServiceError::Domain(DomainError::PropertyNotFound(
                    property_id,
                )));
            }
        }

        let id = self
            .ctx
            .sale_repo()
            .create(&NewBooking {
                property_id: request.property_id,
                client_name: request.client_name,
                client_email: request.client_email,
                client_number: request.client_number,
                amount: request.amount,
                booking_date: request.booking_date,
                status: BookingStatus::Pending,
            })
            .await?;

        info!(booking_id = id, "Sale booking created successfully");

        self.get(id).await
    }

    /// Update a booking. Absent request fields keep their stored value.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateBookingRequest) -> ServiceResult<SaleBooking> {
        let mut booking = self.get(id).await?;

        if let Some(property_id) = request.property_id {
            if self
                .ctx
                .property_repo()
                .find_by_id(property_id)
                .await?
                .is_none()
            {
                return Err(ServiceError::Domain(DomainError::PropertyNotFound(
                    property_id,
                )));
            }
            booking.property_id = Some(property_id);
        }
        if let Some(client_name) = request.client_name {
            booking.client_name = client_name;
        }
        if let Some(client_email) = request.client_email {
            booking.client_email = Some(client_email);
        }
        if let Some(client_number) = request.client_number {
            booking.client_number = Some(client_number);
        }
        if let Some(amount) = request.amount {
            booking.amount = amount;
        }
        if let Some(booking_date) = request.booking_date {
            booking.booking_date = booking_date;
        }
        if let Some(status) = request.status {
            booking.status = BookingStatus::from_str(&status)
                .map_err(|e| ServiceError::Domain(DomainError::InvalidStatus(e.0)))?;
        }

        self.ctx.sale_repo().update(&booking).await?;

        info!(booking_id = id, "Sale booking updated successfully");

        self.get(id).await
    }

    /// Delete a booking
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.sale_repo().delete(id).await?;

        info!(booking_id = id, "Sale booking deleted successfully");
        Ok(())
    }
}
