//! View state for the access page.
//!
//! DESIGN
//! ======
//! `health` and `login` are plain structs with pure transitions so the
//! page component stays a thin shell; `store` is the seam through which both
//! the component and tests apply those transitions.

pub mod health;
pub mod login;
pub mod store;
