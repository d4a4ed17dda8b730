//! Page components.

pub mod login;
