//! Page components mapped to routes.

pub mod login;
pub mod register;
