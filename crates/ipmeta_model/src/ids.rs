//! Handle type for ports stored in a component's arena.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a port in [`Component::ports`](crate::Component::ports).
///
/// Stays valid across pin imports since ports are only appended or updated
/// in place.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(u32);

impl PortId {
    /// Wraps a raw arena index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl ArenaId for PortId {
    fn from_raw(index: u32) -> Self {
        PortId::from_raw(index)
    }

    fn as_raw(self) -> u32 {
        PortId::as_raw(self)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_arena_position() {
        let first = PortId::from_raw(1);
        let second = PortId::from_raw(2);
        assert_eq!(first.as_raw(), 1);
        assert!(first < second);
        assert_eq!(second.to_string(), "port#2");
    }

    #[test]
    fn serializes_as_bare_index() {
        let id = PortId::from_raw(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        assert_eq!(serde_json::from_str::<PortId>(&json).unwrap(), id);
    }
}
