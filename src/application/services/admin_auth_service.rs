//! Authentication service for the admin endpoints.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::Config;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Verifies HTTP Basic credentials against the configured admin account.
///
/// The configured user and password are kept only as HMAC-SHA256 tags under
/// a per-process random key. Supplied credentials are tagged the same way and
/// compared with [`Mac::verify_slice`], which runs in constant time.
pub struct AdminAuthService {
    key: [u8; 32],
    user_tag: Vec<u8>,
    password_tag: Vec<u8>,
}

impl AdminAuthService {
    /// Creates a new authentication service.
    pub fn new(user: &str, password: &str) -> Self {
        let key: [u8; 32] = rand::random();
        let user_tag = mac(&key, user).finalize().into_bytes().to_vec();
        let password_tag = mac(&key, password).finalize().into_bytes().to_vec();

        Self {
            key,
            user_tag,
            password_tag,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.admin_user, &config.admin_password)
    }

    /// Returns true if both user and password match.
    ///
    /// Both comparisons always run so timing does not reveal which one failed.
    pub fn verify(&self, user: &str, password: Option<&str>) -> bool {
        let user_ok = mac(&self.key, user).verify_slice(&self.user_tag).is_ok();
        let password_ok = mac(&self.key, password.unwrap_or_default())
            .verify_slice(&self.password_tag)
            .is_ok();

        user_ok & password_ok
    }

    /// Authenticates Basic credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    pub fn authenticate(&self, user: &str, password: Option<&str>) -> Result<(), AppError> {
        if !self.verify(user, password) {
            tracing::info!(user, "admin authentication failed");
            return Err(AppError::unauthorized());
        }

        Ok(())
    }
}

fn mac(key: &[u8], value: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    mac
}
