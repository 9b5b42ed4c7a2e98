//! Property listing service

use std::str::FromStr;

use estate_core::entities::Property;
use estate_core::error::DomainError;
use estate_core::traits::NewProperty;
use estate_core::value_objects::PropertyStatus;
use tracing::{info, instrument};

use crate::dto::{CreatePropertyRequest, UpdatePropertyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Property listing management service
pub struct PropertyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PropertyService<'a> {
    /// Create a new PropertyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all property listings
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Property>> {
        Ok(self.ctx.property_repo().find_all().await?)
    }

    /// Get a single listing
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<Property> {
        self.ctx
            .property_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PropertyNotFound(id)))
    }

    /// Create a new listing
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreatePropertyRequest) -> ServiceResult<Property> {
        let id = self
            .ctx
            .property_repo()
            .create(&NewProperty {
                title: request.title,
                description: request.description,
                price: request.price,
                address: request.address,
                img: request.img,
                status: PropertyStatus::Available,
            })
            .await?;

        info!(property_id = id, "Property created successfully");

        self.get(id).await
    }

    /// Update a listing. Absent request fields keep their stored value.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdatePropertyRequest) -> ServiceResult<Property> {
        let mut property = self.get(id).await?;

        if let Some(title) = request.title {
            property.title = title;
        }
        if let Some(description) = request.description {
            property.description = Some(description);
        }
        if let Some(price) = request.price {
            property.price = price;
        }
        if let Some(address) = request.address {
            property.address = Some(address);
        }
        if let Some(img) = request.img {
            property.img = Some(img);
        }
        if let Some(status) = request.status {
            property.status = PropertyStatus::from_str(&status)
                .map_err(|e| ServiceError::Domain(DomainError::InvalidStatus(e.0)))?;
        }

        self.ctx.property_repo().update(&property).await?;

        info!(property_id = id, "Property updated successfully");

        self.get(id).await
    }

    /// Delete a listing
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.property_repo().delete(id).await?;

        info!(property_id = id, "Property deleted successfully");
        Ok(())
    }
}
