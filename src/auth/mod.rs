pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::verify_token;
