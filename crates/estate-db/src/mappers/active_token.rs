//! Active token entity <-> model mapper

use estate_core::entities::ActiveToken;

use crate::models::ActiveTokenModel;

impl From<ActiveTokenModel> for ActiveToken {
    fn from(model: ActiveTokenModel) -> Self {
        ActiveToken {
            id: model.id,
            user_id: model.user_id,
            session_id: model.session_id,
            access_expires_at: model.access_expires_at,
            last_activity: model.last_activity,
            is_blacklisted: model.is_blacklisted,
            created_at: model.created_at,
        }
    }
}
