use access_control::AuthError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PropertyError {
    /// Property size must be positive
    InvalidSize = 1,
    /// Caller is not the designated minter, or not the current owner
    Unauthorized = 100,
}

impl From<AuthError> for PropertyError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => PropertyError::Unauthorized,
        }
    }
}
