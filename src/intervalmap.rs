//! A compressed map representing a total, piecewise-constant function.
//!
//! [`IntervalMap`] associates every key of a totally ordered key space `K`
//! with a value of `V`, but stores only the *breakpoints*: the keys at which
//! the value changes. A baseline value covers everything below the smallest
//! breakpoint. Assigning a value to a half-open key interval touches only the
//! breakpoints inside and adjacent to that interval, so range updates cost
//! O(log n + k) rather than O(interval size).
//!
//! The map maintains a canonical form: no stored entry carries the same value
//! as the entry (or the baseline) immediately preceding it. This makes the
//! representation minimal and unique, so two maps describe the same function
//! exactly when they compare equal.

use std::collections::BTreeMap;

use arbitrary::{Arbitrary, Unstructured};

/// An ordered association of breakpoint keys to values.
///
/// For a breakpoint `b` mapped to `v`, every key `k` with `b <= k` and `k`
/// below the next breakpoint maps to `v`. Keys below the smallest breakpoint
/// map to the baseline value passed to [`IntervalMap::new`].
///
/// `K` only needs a total order and `V` only needs equality; `V: Clone` is
/// required by [`assign`](IntervalMap::assign), which carries the value
/// covering the interval's end over into a new boundary entry.
///
/// The map has no internal synchronization. `assign` needs exclusive access,
/// and lookups may run concurrently only while no assignment is in flight,
/// which is exactly what the `&mut self`/`&self` split enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    baseline: V,
    breaks: BTreeMap<K, V>,
}

impl<K, V> IntervalMap<K, V> {
    /// Creates a map representing the constant function `baseline` over all
    /// of `K`.
    pub fn new(baseline: V) -> Self {
        IntervalMap {
            baseline,
            breaks: BTreeMap::new(),
        }
    }

    /// The value covering all keys below the smallest breakpoint.
    pub fn baseline(&self) -> &V {
        &self.baseline
    }

    /// The stored breakpoints in ascending key order.
    ///
    /// Intended for diagnostics and tests; point queries go through
    /// [`get`](IntervalMap::get).
    pub fn breakpoints(&self) -> impl Iterator<Item = (&K, &V)> {
        self.breaks.iter()
    }

    /// The number of stored breakpoints.
    pub fn breakpoint_count(&self) -> usize {
        self.breaks.len()
    }

    /// Whether the map is the constant function equal to its baseline.
    pub fn is_constant(&self) -> bool {
        self.breaks.is_empty()
    }
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Looks up the value associated with `key`.
    ///
    /// Returns the value of the greatest breakpoint at or below `key`, or the
    /// baseline if no such breakpoint exists. O(log n), defined for every key.
    pub fn get(&self, key: &K) -> &V {
        self.breaks
            .range(..=key)
            .next_back()
            .map(|(_, v)| v)
            .unwrap_or(&self.baseline)
    }
}

impl<K: Ord, V: PartialEq + Clone> IntervalMap<K, V> {
    /// Assigns `value` to the half-open interval `[begin, end)`, leaving all
    /// other keys unchanged.
    ///
    /// If `!(begin < end)` the interval is empty and the call does nothing.
    /// Afterwards the map is back in canonical form: breakpoints superseded
    /// by the assignment are gone, and no boundary entry was written where
    /// the neighboring region already carries the same value.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if end <= begin {
            return;
        }

        // Split out the affected neighborhood. `covered` holds the
        // breakpoints in [begin, end), all superseded by the assignment;
        // `tail` holds everything at or above `end`.
        let mut covered = self.breaks.split_off(&begin);
        let mut tail = covered.split_off(&end);

        // The value covering `end` just before this call. It resumes at a
        // boundary entry at `end` unless the assigned interval already
        // carries it.
        let resume = if let Some(stored) = tail.remove(&end) {
            stored
        } else if let Some((_, last)) = covered.pop_last() {
            last
        } else {
            match self.breaks.last_key_value() {
                Some((_, v)) => v.clone(),
                None => self.baseline.clone(),
            }
        };

        let write_end = resume != value;
        let write_begin = match self.breaks.last_key_value() {
            Some((_, v)) => *v != value,
            None => self.baseline != value,
        };

        if write_begin {
            self.breaks.insert(begin, value);
        }
        if write_end {
            self.breaks.insert(end, resume);
        }
        self.breaks.append(&mut tail);
    }
}

/// Builds a map from an arbitrary baseline followed by an arbitrary sequence
/// of interval assignments, so fuzzed maps are always in canonical form.
impl<'a, K, V> Arbitrary<'a> for IntervalMap<K, V>
where
    K: Ord + Arbitrary<'a>,
    V: PartialEq + Clone + Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut map = IntervalMap::new(u.arbitrary()?);
        for op in u.arbitrary_iter::<(K, K, V)>()? {
            let (begin, end, value) = op?;
            map.assign(begin, end, value);
        }
        Ok(map)
    }
}
