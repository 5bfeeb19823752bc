//! Opaque id newtypes for netlist entities.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Id of a signal or node in the design's object arena.
    ObjectId
);

define_id!(
    /// Id of a state in a sequential primitive's state table.
    UdpStateId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_hash_and_compare() {
        let mut set = HashSet::new();
        set.insert(ObjectId::from_raw(1));
        set.insert(ObjectId::from_raw(1));
        set.insert(ObjectId::from_raw(2));
        assert_eq!(set.len(), 2);
        assert!(ObjectId::from_raw(1) < ObjectId::from_raw(2));
    }

    #[test]
    fn id_serde_is_transparent_index() {
        let json = serde_json::to_string(&UdpStateId::from_raw(9)).unwrap();
        assert_eq!(json, "9");
    }
}
