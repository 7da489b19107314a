//! This module contains example key and value types for use in the
//! documentation and tests. They are not intended to be used in practice.
//!
//! [`DemoKey`] supports nothing beyond the total order and [`DemoValue`]
//! nothing beyond equality and cloning, pinning the minimal trait bounds
//! that [`IntervalMap`](crate::IntervalMap) demands of its parameters.

use arbitrary::Arbitrary;

/// A key type that is only ordered. No `Clone`, no `Copy`, no hashing.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Arbitrary)]
pub struct DemoKey(pub i32);

/// A value type that is only equality-comparable and cloneable. No ordering.
#[derive(Debug, Clone, PartialEq, Arbitrary)]
pub struct DemoValue(pub u32);
