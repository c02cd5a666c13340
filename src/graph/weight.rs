//! Numeric edge weights.

use core::cmp::Ordering;
use core::fmt::Debug;

use num_traits::{CheckedAdd, Num};

/// A numeric edge weight.
///
/// Implemented for the signed and unsigned integers, `f32` and `f64`. Unit
/// edges use `W::one()`.
///
/// Path lengths are accumulated with [`checked_sum`](Weight::checked_sum): a
/// sum the type cannot represent is treated as infinite, so a path that long
/// counts as no path at all instead of wrapping around.
pub trait Weight: Num + Copy + PartialOrd + Debug {
    /// `self + rhs`, or `None` if the sum leaves the type's finite range.
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Returns `true` if the weight is below zero.
    #[inline]
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! integer_weight {
    ($($t:ty)*) => {$(
        impl Weight for $t {
            #[inline]
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty)*) => {$(
        impl Weight for $t {
            #[inline]
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }
        }
    )*};
}

integer_weight!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
float_weight!(f32 f64);

/// `Some(a + b)` when both are finite and the sum fits, `None` (infinity) otherwise.
#[inline]
pub(crate) fn add_finite<W: Weight>(a: Option<W>, b: Option<W>) -> Option<W> {
    a?.checked_sum(b?)
}

/// `true` if `candidate` strictly improves on `current`, where `None` is infinity.
#[inline]
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    current.map_or(true, |c| candidate < c)
}

/// Total order over weights: the usual order, with NaN after every number.
#[inline]
pub(crate) fn weight_order<W: Weight>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| is_unordered(a).cmp(&is_unordered(b)))
}

#[inline]
fn is_unordered<W: Weight>(w: &W) -> bool {
    w.partial_cmp(w).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_arithmetic() {
        assert_eq!(add_finite(Some(2), Some(3)), Some(5));
        assert_eq!(add_finite::<i32>(None, Some(3)), None);
        assert!(improves(4, None));
        assert!(improves(4, Some(5)));
        assert!(!improves(5, Some(5)));
        assert!((-1.5_f64).is_negative());
        assert!(!0_u32.is_negative());
    }

    #[test]
    fn out_of_range_sums_are_infinite() {
        assert_eq!(200_u8.checked_sum(100), None);
        assert_eq!(200_u8.checked_sum(55), Some(255));
        assert_eq!((-100_i8).checked_sum(-100), None);
        assert_eq!(f32::MAX.checked_sum(f32::MAX), None);
        assert_eq!(1.5_f64.checked_sum(2.0), Some(3.5));
        assert_eq!(add_finite(Some(u16::MAX), Some(1)), None);
    }

    #[test]
    fn nan_sorts_last() {
        let mut weights = vec![2.0, f64::NAN, -1.0, f64::NAN, 0.5];
        weights.sort_by(weight_order);
        assert_eq!(&weights[..3], &[-1.0, 0.5, 2.0]);
        assert!(weights[3..].iter().all(|w| w.is_nan()));
        assert_eq!(weight_order(&3_u8, &1), Ordering::Greater);
    }
}
