pub mod access_jwt;
pub mod claims;
pub mod factory;
pub mod policy;

pub use access_jwt::{AuthError, AuthService};
pub use claims::Principal;
pub use factory::build_auth_service;
pub use policy::AuthFailurePolicy;
