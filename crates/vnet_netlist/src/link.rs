//! Pins and the intrusive connectivity rings that join them into nets.
//!
//! Every pin stores the [`PinRef`] of its neighbours in the ring of pins that
//! share a net. An unconnected pin is a ring of one, linked to itself. All
//! ring surgery goes through the owning [`Arena`], because the two ends of a
//! link usually belong to different objects.

use crate::arena::Arena;
use crate::ids::ObjectId;
use crate::object::Object;
use serde::{Deserialize, Serialize};

/// Informational direction of a pin. Joining and leaving never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PinDir {
    /// Neither driver nor receiver, the default.
    #[default]
    Passive,
    /// The owning object reads the net.
    Input,
    /// The owning object drives the net.
    Output,
}

impl PinDir {
    /// Returns the one-letter tag used in pin listings.
    pub fn tag(self) -> char {
        match self {
            PinDir::Passive => 'p',
            PinDir::Input => 'I',
            PinDir::Output => 'O',
        }
    }
}

/// Identity of a pin: owning object plus index into its pin array.
///
/// Stays valid for the lifetime of the design, since objects are never moved
/// and pin arrays never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PinRef {
    /// The owning object.
    pub obj: ObjectId,
    /// Index of the pin within the owner.
    pub idx: u32,
}

impl PinRef {
    /// Creates a reference to pin `idx` of `obj`.
    pub fn new(obj: ObjectId, idx: u32) -> Self {
        Self { obj, idx }
    }
}

/// One terminal of an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    dir: PinDir,
    next: PinRef,
    prev: PinRef,
}

impl Pin {
    /// Creates an unconnected pin, i.e. a ring containing only `this`.
    pub(crate) fn unconnected(this: PinRef) -> Self {
        Self {
            dir: PinDir::Passive,
            next: this,
            prev: this,
        }
    }

    /// Returns the pin's direction.
    pub fn dir(&self) -> PinDir {
        self.dir
    }

    pub(crate) fn set_dir(&mut self, dir: PinDir) {
        self.dir = dir;
    }

    /// Returns the next pin in the ring.
    pub fn next(&self) -> PinRef {
        self.next
    }

    /// Returns the previous pin in the ring.
    pub fn prev(&self) -> PinRef {
        self.prev
    }
}

pub(crate) fn pin(objects: &Arena<ObjectId, Object>, p: PinRef) -> &Pin {
    objects[p.obj].pin(p.idx)
}

fn pin_mut(objects: &mut Arena<ObjectId, Object>, p: PinRef) -> &mut Pin {
    objects[p.obj].pin_mut(p.idx)
}

/// Overwrites the successor of `p` without patching either neighbour.
#[cfg(any(test, feature = "test-support"))]
pub(crate) fn set_next(objects: &mut Arena<ObjectId, Object>, p: PinRef, next: PinRef) {
    pin_mut(objects, p).next = next;
}

/// Returns `true` if `b` is in the ring of `a`. Linear in the ring size.
pub(crate) fn is_linked(objects: &Arena<ObjectId, Object>, a: PinRef, b: PinRef) -> bool {
    a == b || Ring::new(objects, a).any(|p| p == b)
}

/// Splices the ring of `b` into the ring of `a` after `a`.
///
/// The rings must be distinct; splicing two pins of the same ring splits it.
pub(crate) fn splice(objects: &mut Arena<ObjectId, Object>, a: PinRef, b: PinRef) {
    let a_next = pin(objects, a).next;
    let b_next = pin(objects, b).next;

    pin_mut(objects, a).next = b_next;
    pin_mut(objects, b_next).prev = a;
    pin_mut(objects, b).next = a_next;
    pin_mut(objects, a_next).prev = b;
}

/// Removes `p` from its ring, leaving it a singleton. No-op on a singleton.
pub(crate) fn unlink(objects: &mut Arena<ObjectId, Object>, p: PinRef) {
    let (next, prev) = {
        let this = pin(objects, p);
        (this.next, this.prev)
    };
    if next == p {
        return;
    }
    pin_mut(objects, prev).next = next;
    pin_mut(objects, next).prev = prev;
    let this = pin_mut(objects, p);
    this.next = p;
    this.prev = p;
}

/// Walks the ring of `start`, checking that every successor links back.
///
/// Returns the ring size, or a description of the first broken link. The
/// walk gives up after `limit` steps so a ring that never returns to
/// `start` is reported instead of looping.
pub(crate) fn verify(
    objects: &Arena<ObjectId, Object>,
    start: PinRef,
    limit: usize,
) -> Result<usize, String> {
    let mut cur = start;
    let mut size = 0;
    loop {
        let next = pin(objects, cur).next;
        if !objects.contains(next.obj) || next.idx >= objects[next.obj].pin_count() {
            return Err(format!(
                "pin {}.{} links to a pin that does not exist",
                cur.obj.as_raw(),
                cur.idx
            ));
        }
        if pin(objects, next).prev != cur {
            return Err(format!(
                "pin {}.{} is not the predecessor of its successor",
                cur.obj.as_raw(),
                cur.idx
            ));
        }
        size += 1;
        if next == start {
            return Ok(size);
        }
        if size >= limit {
            return Err(format!(
                "ring of pin {}.{} does not close within {limit} pins",
                start.obj.as_raw(),
                start.idx
            ));
        }
        cur = next;
    }
}

/// Lazy iterator over every pin in a ring except the start pin.
pub struct Ring<'a> {
    objects: &'a Arena<ObjectId, Object>,
    start: PinRef,
    cur: PinRef,
}

impl<'a> Ring<'a> {
    pub(crate) fn new(objects: &'a Arena<ObjectId, Object>, start: PinRef) -> Self {
        Self {
            objects,
            start,
            cur: start,
        }
    }
}

impl Iterator for Ring<'_> {
    type Item = PinRef;

    fn next(&mut self) -> Option<PinRef> {
        let next = pin(self.objects, self.cur).next;
        if next == self.start {
            return None;
        }
        self.cur = next;
        Some(next)
    }
}
