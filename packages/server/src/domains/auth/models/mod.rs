pub mod super_admin_email;
pub mod user;

pub use super_admin_email::SuperAdminEmail;
pub use user::{normalize_email, CreateUser, User};
