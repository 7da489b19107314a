//! A compressed map from totally ordered keys to values.
//!
//! [`IntervalMap`] represents a total function `K -> V` that is
//! piecewise-constant: large contiguous key ranges share one value. Instead
//! of a value per key it stores one baseline value plus the breakpoints where
//! the value changes, so assigning a value to a whole key range costs
//! O(log n + k) in the number of stored breakpoints rather than O(range).
//!
//! ```
//! use intervalmap::IntervalMap;
//!
//! let mut map = IntervalMap::new('A');
//! map.assign(1, 5, 'B');
//!
//! assert_eq!(*map.get(&0), 'A');
//! assert_eq!(*map.get(&1), 'B');
//! assert_eq!(*map.get(&4), 'B');
//! assert_eq!(*map.get(&5), 'A');
//! ```
//!
//! The representation is canonical: adjacent regions never carry equal
//! values, so a map compares equal to another exactly when both describe the
//! same function. See the [module docs](crate::intervalmap) for the invariant
//! and the complexity contract.
//!
//! The map is `Send`/`Sync` whenever `K` and `V` are, but carries no internal
//! locking: callers need exclusive access for [`IntervalMap::assign`], while
//! any number of [`IntervalMap::get`] calls may proceed concurrently when no
//! assignment is running.

pub mod examples;
pub mod intervalmap;

pub use intervalmap::IntervalMap;
