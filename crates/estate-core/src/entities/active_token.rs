//! Active token entity - one authenticated session recorded in the store

use chrono::{DateTime, Utc};

/// Authentication session record backing a JWT access token
///
/// Blacklisting is monotonic: once `is_blacklisted` is set it is never
/// cleared, and the row is eventually removed by the sweeper's purge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToken {
    pub id: i64,
    pub user_id: i64,
    /// Session identifier carried in the JWT claims
    pub session_id: String,
    pub access_expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub is_blacklisted: bool,
    pub created_at: DateTime<Utc>,
}

impl ActiveToken {
    /// Check if the access validity window has passed
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.access_expires_at
    }

    /// Check whether the sweeper's expire pass would blacklist this token:
    /// expired, not kept alive past its own expiry, and not already
    /// blacklisted. A session whose last activity reached or passed the
    /// expiry instant counts as renewed and is left alone.
    #[must_use]
    pub fn is_sweep_eligible(&self, now: DateTime<Utc>) -> bool {
        self.access_expires_at < now
            && self.last_activity < self.access_expires_at
            && !self.is_blacklisted
    }

    /// Check if the token is usable for authentication
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_blacklisted && !self.is_expired()
    }
}
