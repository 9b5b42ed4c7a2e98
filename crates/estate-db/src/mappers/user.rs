//! User entity <-> model mapper

use estate_core::entities::User;
use estate_core::error::DomainError;
use estate_core::value_objects::UserStatus;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let status: UserStatus = model
            .status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(model.status.clone()))?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            number: model.number,
            alt_number: model.alt_number,
            img: model.img,
            status,
            address: model.address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
