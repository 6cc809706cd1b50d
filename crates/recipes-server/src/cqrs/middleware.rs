//! CQRS markers
//!
//! Every write request implements [`Command`] and every read request
//! implements [`Query`], so the kind of a request is visible in its type.

/// Marker for requests that change recipe state
pub trait Command {}

/// Marker for read-only requests
pub trait Query {}
