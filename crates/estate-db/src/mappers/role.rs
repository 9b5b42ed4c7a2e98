//! Role entity <-> model mapper

use estate_core::entities::Role;

use crate::models::RoleModel;

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
