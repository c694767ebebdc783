//! Bearer-token authentication: claims, the token service, and the route
//! middleware that ties them together.

pub mod middleware;
pub mod models;
pub mod token;

pub use middleware::require_auth;
pub use models::{AuthenticatedUser, Claims};
pub use token::TokenService;
