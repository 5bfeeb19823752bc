//! The structural object: a fixed array of pins plus delays and attributes.

use crate::ids::ObjectId;
use crate::link::{Pin, PinDir, PinRef};
use crate::node::NodeKind;
use crate::signal::SignalInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use vnet_common::Ident;

/// Rise, fall and decay times of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Delay {
    /// Rise time.
    pub rise: u64,
    /// Fall time.
    pub fall: u64,
    /// Decay (turn-off) time.
    pub decay: u64,
}

impl Delay {
    /// Creates a delay triple.
    pub fn new(rise: u64, fall: u64, decay: u64) -> Self {
        Self { rise, fall, decay }
    }
}

/// Formats as `#(rise,fall,decay)`.
impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#({},{},{})", self.rise, self.fall, self.decay)
    }
}

/// What an object is. Fixed when the object is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A member of the design's signal list.
    Signal(SignalInfo),
    /// A member of the design's node list.
    Node(NodeKind),
}

/// A signal or node owned by the design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    id: ObjectId,
    /// The object's name.
    pub name: Ident,
    pins: Box<[Pin]>,
    /// Rise/fall/decay delays.
    pub delay: Delay,
    /// String attributes, one value per key.
    pub attributes: BTreeMap<String, String>,
    kind: ObjectKind,
    next: ObjectId,
}

impl Object {
    pub(crate) fn new(id: ObjectId, name: Ident, pin_count: u32, kind: ObjectKind) -> Self {
        let pins = (0..pin_count)
            .map(|idx| Pin::unconnected(PinRef::new(id, idx)))
            .collect();
        Self {
            id,
            name,
            pins,
            delay: Delay::default(),
            attributes: BTreeMap::new(),
            kind,
            next: id,
        }
    }

    /// Returns the object's id in the design.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the number of pins, fixed at construction.
    pub fn pin_count(&self) -> u32 {
        self.pins.len() as u32
    }

    /// Returns pin `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.pin_count()`.
    pub fn pin(&self, idx: u32) -> &Pin {
        &self.pins[idx as usize]
    }

    pub(crate) fn pin_mut(&mut self, idx: u32) -> &mut Pin {
        &mut self.pins[idx as usize]
    }

    /// Returns the identity of pin `idx`.
    pub fn pin_ref(&self, idx: u32) -> PinRef {
        PinRef::new(self.id, idx)
    }

    /// Iterates over the pins in index order.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    /// Sets the direction of pin `idx`.
    pub fn set_pin_dir(&mut self, idx: u32, dir: PinDir) {
        self.pin_mut(idx).set_dir(dir);
    }

    /// Sets the direction of every pin.
    pub fn set_all_pin_dirs(&mut self, dir: PinDir) {
        for pin in self.pins.iter_mut() {
            pin.set_dir(dir);
        }
    }

    /// Returns the object's kind.
    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Returns the signal data if this object is a signal.
    pub fn as_signal(&self) -> Option<&SignalInfo> {
        match &self.kind {
            ObjectKind::Signal(info) => Some(info),
            ObjectKind::Node(_) => None,
        }
    }

    /// Returns the signal data mutably if this object is a signal.
    pub fn as_signal_mut(&mut self) -> Option<&mut SignalInfo> {
        match &mut self.kind {
            ObjectKind::Signal(info) => Some(info),
            ObjectKind::Node(_) => None,
        }
    }

    /// Returns the node kind if this object is a node.
    pub fn as_node(&self) -> Option<&NodeKind> {
        match &self.kind {
            ObjectKind::Node(kind) => Some(kind),
            ObjectKind::Signal(_) => None,
        }
    }

    /// Returns `true` if this object is a signal.
    pub fn is_signal(&self) -> bool {
        matches!(self.kind, ObjectKind::Signal(_))
    }

    /// Sets attribute `key`, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Returns the value of attribute `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub(crate) fn list_next(&self) -> ObjectId {
        self.next
    }

    pub(crate) fn set_list_next(&mut self, next: ObjectId) {
        self.next = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;

    fn signal(width: u32) -> Object {
        Object::new(
            ObjectId::from_raw(0),
            Ident::from_raw(0),
            width,
            ObjectKind::Signal(SignalInfo::new(SignalKind::Wire, width)),
        )
    }

    #[test]
    fn delay_display() {
        assert_eq!(format!("{}", Delay::new(1, 2, 3)), "#(1,2,3)");
        assert_eq!(format!("{}", Delay::default()), "#(0,0,0)");
    }

    #[test]
    fn new_object_pins_are_unconnected() {
        let obj = signal(3);
        assert_eq!(obj.pin_count(), 3);
        for idx in 0..3 {
            assert_eq!(obj.pin(idx).next(), obj.pin_ref(idx));
            assert_eq!(obj.pin(idx).dir(), PinDir::Passive);
        }
    }

    #[test]
    fn attributes_keep_one_value_per_key() {
        let mut obj = signal(1);
        obj.set_attribute("cellref", "AND2");
        obj.set_attribute("cellref", "OR2");
        obj.set_attribute("area", "4");
        assert_eq!(obj.attribute("cellref"), Some("OR2"));
        let keys: Vec<&String> = obj.attributes.keys().collect();
        assert_eq!(keys, vec!["area", "cellref"]);
    }

    #[test]
    fn kind_accessors() {
        let mut obj = signal(2);
        assert!(obj.is_signal());
        assert!(obj.as_node().is_none());
        obj.as_signal_mut().unwrap().local = true;
        assert!(obj.as_signal().unwrap().local);
    }

    #[test]
    fn pin_directions() {
        let mut obj = signal(2);
        obj.set_pin_dir(1, PinDir::Output);
        assert_eq!(obj.pin(0).dir(), PinDir::Passive);
        assert_eq!(obj.pin(1).dir(), PinDir::Output);
        obj.set_all_pin_dirs(PinDir::Input);
        assert!(obj.pins().all(|p| p.dir() == PinDir::Input));
    }
}
