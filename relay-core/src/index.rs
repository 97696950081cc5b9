//! Bookings grouped by start location.
//!
//! [`StartIndex`] is built once per solve. It owns no bookings: it keeps an
//! arena view of the caller's slice, interns every start label to a dense
//! [`LocationId`] and groups arena slots into one bucket per location.
//!
//! Search state lives in [`Remaining`], a bitset of unconsumed slots plus a
//! per-location counter. Consuming a booking produces a new `Remaining`
//! ([`StartIndex::without`]), so sibling branches that share an ancestor never
//! observe each other's consumption and the input slice is never touched.
//! Copying a `Remaining` costs one bitset and one counter per location rather
//! than a copy of every bucket.

use std::collections::{HashMap, HashSet};

use fixedbitset::FixedBitSet;

use crate::Booking;

/// Dense identifier for a start location within one [`StartIndex`].
///
/// Identifiers follow the index's natural key order: labels that are
/// canonical array indices (`"0"`, `"7"`, `"10"`, but not `"07"`) come first
/// in ascending numeric order, then every other label in order of its first
/// appearance as a booking start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    /// Position of the location in natural key order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Bookings grouped by start location, in input order.
///
/// Every booking appears in exactly one bucket. Buckets follow natural key
/// order (see [`LocationId`]); bookings inside a bucket keep input order.
///
/// # Examples
/// ```
/// use relay_core::{Booking, StartIndex};
///
/// let bookings = [
///     Booking::new(1, "a", "b"),
///     Booking::new(2, "c", "a"),
///     Booking::new(3, "a", "c"),
/// ];
/// let index = StartIndex::new(&bookings);
///
/// let labels: Vec<_> = index.locations().filter_map(|loc| index.label(loc)).collect();
/// assert_eq!(labels, ["a", "c"]);
///
/// let a = index.location("a").expect("a starts a booking");
/// let ids: Vec<_> = index.bucket(a).map(Booking::id).collect();
/// assert_eq!(ids, [1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct StartIndex<'a> {
    bookings: &'a [Booking],
    ids: HashMap<&'a str, LocationId>,
    labels: Vec<&'a str>,
    buckets: Vec<Vec<usize>>,
    starts: Vec<LocationId>,
    ends: Vec<Option<LocationId>>,
}

impl<'a> StartIndex<'a> {
    /// Group `bookings` by start location.
    #[must_use]
    pub fn new(bookings: &'a [Booking]) -> Self {
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut labels: Vec<&'a str> = bookings
            .iter()
            .map(Booking::start)
            .filter(|label| seen.insert(label))
            .collect();
        // Stable, so non-index labels keep first-appearance order.
        labels.sort_by_key(|label| array_index(label).map_or((1, 0), |value| (0, value)));

        let ids: HashMap<&'a str, LocationId> = labels
            .iter()
            .enumerate()
            .map(|(position, &label)| (label, LocationId(position)))
            .collect();
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); labels.len()];
        let mut starts = Vec::with_capacity(bookings.len());
        for (slot, booking) in bookings.iter().enumerate() {
            if let Some(&location) = ids.get(booking.start()) {
                if let Some(bucket) = buckets.get_mut(location.0) {
                    bucket.push(slot);
                }
                starts.push(location);
            }
        }

        // An end label that starts no booking has no bucket; it can never be
        // continued for free.
        let ends = bookings
            .iter()
            .map(|booking| ids.get(booking.end()).copied())
            .collect();

        log::trace!(
            "indexed {} bookings under {} start locations",
            bookings.len(),
            labels.len()
        );

        Self {
            bookings,
            ids,
            labels,
            buckets,
            starts,
            ends,
        }
    }

    /// Number of indexed bookings.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Return `true` when no bookings were indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Number of distinct start locations.
    #[must_use]
    pub const fn location_count(&self) -> usize {
        self.labels.len()
    }

    /// Start locations in natural key order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.labels.len()).map(LocationId)
    }

    /// Look up the identifier of a start label.
    #[must_use]
    pub fn location(&self, label: &str) -> Option<LocationId> {
        self.ids.get(label).copied()
    }

    /// Label of a location.
    #[must_use]
    pub fn label(&self, location: LocationId) -> Option<&'a str> {
        self.labels.get(location.0).copied()
    }

    /// Bookings starting at `location`, in input order.
    pub fn bucket(&self, location: LocationId) -> impl Iterator<Item = &'a Booking> + '_ {
        self.slots_at(location)
            .iter()
            .filter_map(|&slot| self.bookings.get(slot))
    }

    /// Booking stored in an arena slot.
    #[must_use]
    pub fn booking(&self, slot: usize) -> Option<&'a Booking> {
        self.bookings.get(slot)
    }

    /// Start location of the booking in `slot`.
    #[must_use]
    pub fn start_of(&self, slot: usize) -> Option<LocationId> {
        self.starts.get(slot).copied()
    }

    /// End location of the booking in `slot`, if that label starts any booking.
    #[must_use]
    pub fn end_of(&self, slot: usize) -> Option<LocationId> {
        self.ends.get(slot).copied().flatten()
    }

    /// Working state with every booking still available.
    #[must_use]
    pub fn full(&self) -> Remaining {
        let mut slots = FixedBitSet::with_capacity(self.bookings.len());
        slots.insert_range(..);
        Remaining {
            slots,
            per_location: self.buckets.iter().map(Vec::len).collect(),
            len: self.bookings.len(),
        }
    }

    /// Unconsumed slots starting at `location`, in bucket order.
    pub fn remaining_at<'r>(
        &'r self,
        remaining: &'r Remaining,
        location: LocationId,
    ) -> impl Iterator<Item = usize> + 'r {
        self.slots_at(location)
            .iter()
            .copied()
            .filter(move |&slot| remaining.contains(slot))
    }

    /// Copy `remaining` with the booking in `slot` consumed.
    ///
    /// The source state is left untouched. Consuming a slot that is already
    /// gone returns an identical copy.
    #[must_use]
    pub fn without(&self, remaining: &Remaining, slot: usize) -> Remaining {
        let mut next = remaining.clone();
        if !next.contains(slot) {
            return next;
        }
        next.slots.set(slot, false);
        next.len = next.len.saturating_sub(1);
        if let Some(location) = self.start_of(slot)
            && let Some(count) = next.per_location.get_mut(location.0)
        {
            *count = count.saturating_sub(1);
        }
        next
    }

    fn slots_at(&self, location: LocationId) -> &[usize] {
        self.buckets.get(location.0).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Numeric value of `label` when it is a canonical array index: decimal
/// digits without a leading zero, below `u32::MAX`.
fn array_index(label: &str) -> Option<u32> {
    let canonical = !label.is_empty()
        && label.bytes().all(|byte| byte.is_ascii_digit())
        && (label == "0" || !label.starts_with('0'));
    if !canonical {
        return None;
    }
    label.parse::<u32>().ok().filter(|&value| value != u32::MAX)
}

/// Bookings not yet placed on the current search path.
///
/// Produced by [`StartIndex::full`] and [`StartIndex::without`]. A location
/// whose bucket is exhausted behaves as if its key had been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remaining {
    slots: FixedBitSet,
    per_location: Vec<usize>,
    len: usize,
}

impl Remaining {
    /// Number of bookings still available.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Return `true` once every booking has been placed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if the booking in `slot` is still available.
    #[must_use]
    pub fn contains(&self, slot: usize) -> bool {
        self.slots.contains(slot)
    }

    /// Return `true` if any booking starting at `location` is still available.
    #[must_use]
    pub fn has_location(&self, location: LocationId) -> bool {
        self.per_location
            .get(location.0)
            .is_some_and(|&count| count > 0)
    }
}
