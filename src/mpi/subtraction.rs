//! Unsigned and signed subtraction.

use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

use crate::big_digit::{BigDigit, SignedDoubleBigDigit, BITS};
use crate::mpi::Mpi;
use crate::{Error, Result};

/// Subtract with borrow: returns the low limb of `a - b + *acc`, leaving
/// the (non-positive) borrow in `*acc`.
#[inline]
pub(crate) fn sbb(a: BigDigit, b: BigDigit, acc: &mut SignedDoubleBigDigit) -> BigDigit {
    *acc += a as SignedDoubleBigDigit;
    *acc -= b as SignedDoubleBigDigit;
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// Two argument subtraction of raw slices, `a -= b`, returning the borrow
/// out (0 or 1). The borrow keeps propagating through the tail of `a`.
pub(crate) fn __sub2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    let mut borrow: SignedDoubleBigDigit = 0;

    let len = a.len().min(b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);
    debug_assert!(b_hi.iter().all(|&d| d == 0));

    for (a, b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, *b, &mut borrow);
    }

    for a in a_hi {
        if borrow == 0 {
            break;
        }
        *a = sbb(*a, 0, &mut borrow);
    }

    (-borrow) as BigDigit
}

/// Two argument subtraction, `a -= b`, where `a` is known to be at least
/// as large as `b`.
pub(crate) fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let borrow = __sub2(a, b);
    assert!(
        borrow == 0,
        "Cannot subtract b from a because b is larger than a."
    );
}

impl Mpi {
    /// `|self| - |rhs|`  (HAC 14.9)
    ///
    /// Fails with [`Error::NegativeValue`] when `|self| < |rhs|`; the result
    /// is always non-negative.
    pub fn sub_abs(&self, rhs: &Mpi) -> Result<Mpi> {
        if self.cmp_abs(rhs) == Ordering::Less {
            return Err(Error::NegativeValue);
        }

        let mut x = self.abs();
        let n = rhs.significant_limbs();
        sub2(&mut x.limbs, &rhs.limbs[..n]);

        Ok(x)
    }

    /// Signed subtraction, `self - rhs`.
    pub fn sub_mpi(&self, rhs: &Mpi) -> Result<Mpi> {
        let s = self.sign;

        let mut x = if self.sign == rhs.sign {
            if self.cmp_abs(rhs) != Ordering::Less {
                let mut x = self.sub_abs(rhs)?;
                x.sign = s;
                x
            } else {
                let mut x = rhs.sub_abs(self)?;
                x.sign = -s;
                x
            }
        } else {
            let mut x = self.add_abs(rhs)?;
            x.sign = s;
            x
        };

        x.normalize_zero();
        Ok(x)
    }

    /// Signed subtraction of a machine integer, `self - b`.
    pub fn sub_int(&self, b: i64) -> Result<Mpi> {
        self.sub_mpi(&Mpi::from(b))
    }
}

forward_binop!(impl Sub, sub => sub_mpi, "mpi subtraction exceeded the limb cap");
forward_assign!(impl SubAssign, sub_assign => -);
