//! Property entity <-> model mapper

use estate_core::entities::Property;
use estate_core::error::DomainError;
use estate_core::value_objects::PropertyStatus;

use crate::models::PropertyModel;

impl TryFrom<PropertyModel> for Property {
    type Error = DomainError;

    fn try_from(model: PropertyModel) -> Result<Self, Self::Error> {
        let status: PropertyStatus = model
            .status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(model.status.clone()))?;

        Ok(Property {
            id: model.id,
            title: model.title,
            description: model.description,
            price: model.price,
            address: model.address,
            img: model.img,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
