//! Entity to response DTO mappers

use estate_core::entities::{Property, Role, SaleBooking, User};
use estate_core::traits::AssignmentDetail;

use super::responses::{
    AssignmentResponse, BookingResponse, CurrentUserResponse, PropertyResponse, RoleResponse,
    UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            number: user.number.clone(),
            alt_number: user.alt_number.clone(),
            img: user.img.clone(),
            status: user.status.as_str().to_string(),
            address: user.address.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl CurrentUserResponse {
    /// Build from a user entity plus its resolved role names
    pub fn from_user(user: &User, roles: Vec<String>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            img: user.img.clone(),
            status: user.status.as_str().to_string(),
            roles,
        }
    }
}

impl From<&Role> for RoleResponse {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

impl From<&AssignmentDetail> for AssignmentResponse {
    fn from(detail: &AssignmentDetail) -> Self {
        Self {
            id: detail.id,
            user_id: detail.user_id,
            role_id: detail.role_id,
            user_name: detail.user_name.clone(),
            user_email: detail.user_email.clone(),
            role_name: detail.role_name.clone(),
            created_at: detail.created_at,
        }
    }
}

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            description: property.description.clone(),
            price: property.price,
            address: property.address.clone(),
            img: property.img.clone(),
            status: property.status.as_str().to_string(),
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

impl From<&SaleBooking> for BookingResponse {
    fn from(booking: &SaleBooking) -> Self {
        Self {
            id: booking.id,
            property_id: booking.property_id,
            client_name: booking.client_name.clone(),
            client_email: booking.client_email.clone(),
            client_number: booking.client_number.clone(),
            amount: booking.amount,
            booking_date: booking.booking_date,
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
