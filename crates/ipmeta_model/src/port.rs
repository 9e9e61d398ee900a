//! Component ports and their wire or transactional facets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Data flows into the component.
    In,
    /// Data flows out of the component.
    Out,
    /// Bidirectional, also used for power and ground pins.
    InOut,
    /// Not yet classified. Keeps a component valid while its ports are being
    /// rebuilt by an importer.
    Phantom,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
            Direction::Phantom => "phantom",
        })
    }
}

/// A `[left:right]` pair of bound expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left bound expression.
    pub left: String,
    /// Right bound expression.
    pub right: String,
}

impl Bounds {
    /// Creates bounds from two expressions.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Signal-level facet of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    /// Vector bounds; `None` for a single bit.
    pub vector: Option<Bounds>,
    /// Array bounds; `None` when the port is not an array.
    pub array: Option<Bounds>,
}

/// Transaction-level facet of a port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transactional {
    /// Bus width expression.
    pub bus_width: String,
}

/// A port of a component.
///
/// At most one of `wire` and `transactional` is set; the setters below
/// clear the other facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Name, unique within the component.
    pub name: String,
    /// Direction.
    pub direction: Direction,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Wire facet.
    pub wire: Option<Wire>,
    /// Transactional facet.
    pub transactional: Option<Transactional>,
}

impl Port {
    /// Creates a phantom port with no facet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Phantom,
            description: String::new(),
            wire: None,
            transactional: None,
        }
    }

    /// Creates a single-bit wire port.
    pub fn wire(name: impl Into<String>, direction: Direction) -> Self {
        let mut port = Self::new(name);
        port.direction = direction;
        port.set_wire(Wire::default());
        port
    }

    /// Creates a transactional port.
    pub fn transactional(name: impl Into<String>, bus_width: impl Into<String>) -> Self {
        let mut port = Self::new(name);
        port.set_transactional(Transactional {
            bus_width: bus_width.into(),
        });
        port
    }

    /// Sets the wire vector bounds, adding a wire facet if needed.
    pub fn with_vector(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.wire_mut().vector = Some(Bounds::new(left, right));
        self
    }

    /// Sets the wire array bounds, adding a wire facet if needed.
    pub fn with_array(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.wire_mut().array = Some(Bounds::new(left, right));
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the facet with a wire.
    pub fn set_wire(&mut self, wire: Wire) {
        self.transactional = None;
        self.wire = Some(wire);
    }

    /// Replaces the facet with a transactional one.
    pub fn set_transactional(&mut self, transactional: Transactional) {
        self.wire = None;
        self.transactional = Some(transactional);
    }

    fn wire_mut(&mut self) -> &mut Wire {
        if self.wire.is_none() {
            self.set_wire(Wire::default());
        }
        self.wire.get_or_insert_with(Wire::default)
    }

    /// Left vector bound expression, empty without a vector.
    pub fn left_bound(&self) -> &str {
        self.vector().map_or("", |b| b.left.as_str())
    }

    /// Right vector bound expression, empty without a vector.
    pub fn right_bound(&self) -> &str {
        self.vector().map_or("", |b| b.right.as_str())
    }

    /// Left array bound expression, empty without an array.
    pub fn array_left(&self) -> &str {
        self.array().map_or("", |b| b.left.as_str())
    }

    /// Right array bound expression, empty without an array.
    pub fn array_right(&self) -> &str {
        self.array().map_or("", |b| b.right.as_str())
    }

    fn vector(&self) -> Option<&Bounds> {
        self.wire.as_ref()?.vector.as_ref()
    }

    fn array(&self) -> Option<&Bounds> {
        self.wire.as_ref()?.array.as_ref()
    }

    /// Resizes the port to `size` bits.
    ///
    /// Transactional ports take the size as bus width. Otherwise a wire facet
    /// is ensured: one bit clears the vector, wider sizes become
    /// `[size-1:0]`.
    pub fn set_port_size(&mut self, size: u32) {
        if let Some(transactional) = &mut self.transactional {
            transactional.bus_width = size.to_string();
            return;
        }
        let wire = self.wire_mut();
        wire.vector = if size <= 1 {
            None
        } else {
            Some(Bounds::new((size - 1).to_string(), "0"))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_port_is_phantom_without_facet() {
        let p = Port::new("clk");
        assert_eq!(p.direction, Direction::Phantom);
        assert!(p.wire.is_none());
        assert!(p.transactional.is_none());
        assert_eq!(p.left_bound(), "");
    }

    #[test]
    fn vector_and_array_accessors() {
        let p = Port::wire("data", Direction::Out)
            .with_vector("WIDTH-1", "0")
            .with_array("DEPTH-1", "0");
        assert_eq!(p.left_bound(), "WIDTH-1");
        assert_eq!(p.right_bound(), "0");
        assert_eq!(p.array_left(), "DEPTH-1");
        assert_eq!(p.array_right(), "0");
    }

    #[test]
    fn facets_are_exclusive() {
        let mut p = Port::wire("bus", Direction::InOut).with_vector("7", "0");
        p.set_transactional(Transactional {
            bus_width: "32".to_string(),
        });
        assert!(p.wire.is_none());
        assert_eq!(p.left_bound(), "");

        let p = Port::transactional("tlm", "64").with_vector("3", "0");
        assert!(p.transactional.is_none());
        assert_eq!(p.left_bound(), "3");
    }

    #[test]
    fn port_size_on_wire() {
        let mut p = Port::wire("d", Direction::In).with_vector("7", "0");
        p.set_port_size(1);
        assert!(p.wire.as_ref().unwrap().vector.is_none());
        p.set_port_size(4);
        assert_eq!((p.left_bound(), p.right_bound()), ("3", "0"));
    }

    #[test]
    fn port_size_adds_wire_to_bare_port() {
        let mut p = Port::new("LED0");
        p.set_port_size(1);
        assert!(p.wire.is_some());
    }

    #[test]
    fn port_size_on_transactional() {
        let mut p = Port::transactional("tlm", "64");
        p.set_port_size(1);
        assert_eq!(p.transactional.unwrap().bus_width, "1");
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::In.to_string(), "in");
        assert_eq!(Direction::Out.to_string(), "out");
        assert_eq!(Direction::InOut.to_string(), "inout");
        assert_eq!(Direction::Phantom.to_string(), "phantom");
    }
}
