//! Networking modules for the two backend REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns endpoints and response classification, `transport` performs
//! the HTTP exchange, `types` defines the wire schema and `error` the
//! failure taxonomy handed to the view layer.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
