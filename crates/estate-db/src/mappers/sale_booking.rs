//! Sale booking entity <-> model mapper

use estate_core::entities::SaleBooking;
use estate_core::error::DomainError;
use estate_core::value_objects::BookingStatus;

use crate::models::SaleBookingModel;

impl TryFrom<SaleBookingModel> for SaleBooking {
    type Error = DomainError;

    fn try_from(model: SaleBookingModel) -> Result<Self, Self::Error> {
        let status: BookingStatus = model
            .status
            .parse()
            .map_err(|_| DomainError::InvalidStatus(model.status.clone()))?;

        Ok(SaleBooking {
            id: model.id,
            property_id: model.property_id,
            client_name: model.client_name,
            client_email: model.client_email,
            client_number: model.client_number,
            amount: model.amount,
            booking_date: model.booking_date,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
