//! The hardware component model consumed by the meta pipeline.
//!
//! A [`Component`] owns its parameters, ports, views, instantiations, file
//! sets, and remap states. Expressions are kept as raw text that may refer to
//! other parameters by their value identifier; nothing here evaluates them.
//! Ports live in an [`Arena`] so derived data can point at them by [`PortId`]
//! instead of sharing ownership.

#![warn(missing_docs)]

pub mod arena;
pub mod component;
pub mod ids;
pub mod parameter;
pub mod port;
pub mod remap;

pub use arena::{Arena, ArenaId};
pub use component::{Component, ComponentInstantiation, FileSet, View};
pub use ids::PortId;
pub use parameter::{Parameter, ParameterKind};
pub use port::{Bounds, Direction, Port, Transactional, Wire};
pub use remap::{RemapPort, RemapState};
