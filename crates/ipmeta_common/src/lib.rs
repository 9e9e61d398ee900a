//! Shared foundational types used across the ipmeta workspace.
//!
//! This crate provides component identities ([`Vlnv`]), content fingerprints
//! ([`ContentHash`]) and the internal error type used when the tool itself is
//! at fault.

#![warn(missing_docs)]

pub mod hash;
pub mod result;
pub mod vlnv;

pub use hash::ContentHash;
pub use result::{InternalError, MetaResult};
pub use vlnv::{ParseVlnvError, Vlnv};
