//! Networking modules for the REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the collaborator seam and its HTTP implementation; `sync`
//! runs those calls on behalf of components and writes results into their
//! signals.

pub mod api;
#[cfg(test)]
pub mod fake;
pub mod sync;
