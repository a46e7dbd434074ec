use std::{cmp::Ordering, fmt::Debug};

use num_traits::{CheckedAdd, Zero};

/// Index-level view of a graph. Vertices are dense indices `0..vertex_count()`.
pub trait Graph<IdxV> {
    fn vertex_count(&self) -> usize;
    fn adjacency(&self, v: IdxV) -> impl Iterator<Item = IdxV>;
}

pub trait WeightedGraph<IdxV, Weight>: Graph<IdxV> {
    fn adjacency_weight(&self, v: IdxV) -> impl Iterator<Item = (IdxV, Weight)>;
}

/// Edge weights accepted by the shortest-path and spanning-tree engines.
///
/// Only non-negative, mutually comparable values are valid at run time;
/// the engines reject the rest before doing any work.
pub trait Weight: Copy + PartialOrd + Zero + Debug {
    /// `self + other`, or `None` when the sum is not representable.
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Whether `self` can label an edge: comparable and not below zero.
    fn is_valid(self) -> bool {
        matches!(
            self.partial_cmp(&Self::zero()),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                // NaN and both infinities are rejected
                fn is_valid(self) -> bool {
                    self.is_finite() && self >= 0.0
                }
            }
        )*
    };
}

float_weight!(f32, f64);

/// Total order over weights that already passed validation (no NaN).
pub(crate) fn cmp_weight<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
