//! Role assignment mappers

use estate_core::entities::RoleAssignment;
use estate_core::traits::AssignmentDetail;

use crate::models::{AssignmentDetailModel, RoleAssignmentModel};

impl From<RoleAssignmentModel> for RoleAssignment {
    fn from(model: RoleAssignmentModel) -> Self {
        RoleAssignment {
            id: model.id,
            user_id: model.user_id,
            role_id: model.role_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AssignmentDetailModel> for AssignmentDetail {
    fn from(model: AssignmentDetailModel) -> Self {
        AssignmentDetail {
            id: model.id,
            user_id: model.user_id,
            role_id: model.role_id,
            user_name: model.user_name,
            user_email: model.user_email,
            role_name: model.role_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
