use std::ops::{Add, Mul};

use num_traits::Zero;

/// Scalar types a [`Matrix`](crate::Matrix) can hold.
///
/// Anything with a zero, closed addition and multiplication, and cheap
/// copies qualifies. Arithmetic is the type's own: integer overflow follows
/// the usual Rust rules for the build profile.
pub trait Element:
    Copy + PartialEq + Zero + Add<Output = Self> + Mul<Output = Self> + Send + Sync
{
}

impl<T> Element for T where
    T: Copy + PartialEq + Zero + Add<Output = T> + Mul<Output = T> + Send + Sync
{
}
