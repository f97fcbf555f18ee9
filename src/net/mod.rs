//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes one typed function per endpoint, `request` builds the
//! per-call options, `transport` is the seam that actually moves bytes, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
