//! Room occupancy pool.
//!
//! Rooms are 0-indexed here and 1-indexed on patient records.

use hospital_types::well_known;

/// Fixed-capacity pool of rooms with an occupied/free flag each.
///
/// Allocation is two-step: [`allocate`](Self::allocate) only finds the lowest
/// free room, and the caller commits with [`occupy`](Self::occupy) once the
/// rest of the admission has been validated.
///
/// # Example
///
/// ```
/// use hospital_ledger::RoomAllocator;
///
/// let mut rooms = RoomAllocator::new(3);
/// let room = rooms.allocate().unwrap();
/// assert_eq!(room, 0);
/// rooms.occupy(room);
/// assert_eq!(rooms.allocate(), Some(1));
/// rooms.free(room);
/// assert_eq!(rooms.allocate(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAllocator {
    occupied: Vec<bool>,
}

impl Default for RoomAllocator {
    fn default() -> Self {
        Self::new(well_known::TOTAL_ROOMS)
    }
}

impl RoomAllocator {
    /// Creates a pool of `capacity` free rooms.
    pub fn new(capacity: usize) -> Self {
        Self {
            occupied: vec![false; capacity],
        }
    }

    /// Returns the lowest free room index without reserving it.
    pub fn allocate(&self) -> Option<usize> {
        self.occupied.iter().position(|taken| !taken)
    }

    /// Marks a room occupied. Out-of-range indices are ignored.
    pub fn occupy(&mut self, index: usize) {
        if let Some(flag) = self.occupied.get_mut(index) {
            *flag = true;
        }
    }

    /// Marks a room free. Out-of-range indices are ignored.
    pub fn free(&mut self, index: usize) {
        if let Some(flag) = self.occupied.get_mut(index) {
            *flag = false;
        }
    }

    /// Changes capacity, keeping existing flags; new rooms start free.
    pub fn resize(&mut self, capacity: usize) {
        self.occupied.resize(capacity, false);
    }

    /// Returns true if the room exists and is occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied.get(index).copied().unwrap_or(false)
    }

    /// Number of rooms in the pool.
    pub fn capacity(&self) -> usize {
        self.occupied.len()
    }

    /// Number of occupied rooms.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|taken| **taken).count()
    }

    /// Occupancy flags in room order.
    pub fn flags(&self) -> &[bool] {
        &self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_capacity() {
        let rooms = RoomAllocator::default();
        assert_eq!(rooms.capacity(), 100);
        assert_eq!(rooms.occupied_count(), 0);
        assert_eq!(rooms.allocate(), Some(0));
    }

    #[test]
    fn test_allocate_does_not_reserve() {
        let rooms = RoomAllocator::new(5);
        assert_eq!(rooms.allocate(), Some(0));
        assert_eq!(rooms.allocate(), Some(0));
        assert!(!rooms.is_occupied(0));
    }

    #[test]
    fn test_allocate_skips_occupied() {
        let mut rooms = RoomAllocator::new(4);
        rooms.occupy(0);
        rooms.occupy(2);
        assert_eq!(rooms.allocate(), Some(1));
        rooms.occupy(1);
        assert_eq!(rooms.allocate(), Some(3));
        rooms.occupy(3);
        assert_eq!(rooms.allocate(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut rooms = RoomAllocator::new(2);
        rooms.occupy(7);
        rooms.free(7);
        assert_eq!(rooms.occupied_count(), 0);
        assert!(!rooms.is_occupied(7));
    }

    #[test]
    fn test_resize_preserves_flags() {
        let mut rooms = RoomAllocator::new(3);
        rooms.occupy(1);
        rooms.resize(6);
        assert_eq!(rooms.flags(), &[false, true, false, false, false, false]);
        rooms.resize(2);
        assert_eq!(rooms.flags(), &[false, true]);
    }

    #[test]
    fn test_empty_pool() {
        let rooms = RoomAllocator::new(0);
        assert_eq!(rooms.allocate(), None);
    }

    proptest! {
        #[test]
        fn allocated_room_is_never_occupied(taken in proptest::collection::vec(any::<bool>(), 0..120)) {
            let mut rooms = RoomAllocator::new(taken.len());
            for (i, t) in taken.iter().enumerate() {
                if *t {
                    rooms.occupy(i);
                }
            }
            match rooms.allocate() {
                Some(index) => {
                    prop_assert!(!rooms.is_occupied(index));
                    prop_assert!((0..index).all(|i| rooms.is_occupied(i)));
                }
                None => prop_assert!(taken.iter().all(|t| *t)),
            }
        }

        #[test]
        fn freed_room_is_reallocatable(capacity in 1usize..120, pick in any::<prop::sample::Index>()) {
            let mut rooms = RoomAllocator::new(capacity);
            for i in 0..capacity {
                rooms.occupy(i);
            }
            let index = pick.index(capacity);
            rooms.free(index);
            prop_assert_eq!(rooms.allocate(), Some(index));
        }
    }
}
