//! Meta-component assembly: the resolved, ordered view of a component that
//! HDL generation consumes.
//!
//! [`MetaComponent`] resolves the module name and file sets of the active
//! view, orders parameters so producers precede consumers, rewrites every
//! expression with parameter display names, projects ports and remap
//! states, and merges module parameters into the meta-parameter list.
//! [`prepare`] runs the whole flow from a project configuration, including
//! pin import.

#![warn(missing_docs)]

pub mod errors;
pub mod meta_component;
pub mod meta_port;
pub mod pipeline;
pub mod remap;
pub mod sort;

pub use meta_component::{MetaComponent, MetaSnapshot, ResolvedParameter};
pub use meta_port::MetaPort;
pub use pipeline::{prepare, prepare_project};
pub use remap::{FormattedRemapPort, FormattedRemapState};
pub use sort::{sort_parameters, stable_sort_by};
