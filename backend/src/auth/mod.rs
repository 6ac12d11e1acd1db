//! Authentication module
//!
//! Password hashing for the credential store and JWT session tokens.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::{PasswordScheme, PasswordService};
