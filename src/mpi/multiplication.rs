//! Schoolbook multiplication.

use core::ops::{Mul, MulAssign};

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};
use crate::mpi::addition::__add2;
use crate::mpi::{Mpi, Sign};
use crate::Result;

/// Multiply-accumulate with carry: returns the low limb of
/// `a + b * c + *acc`, leaving the carry in `*acc`.
#[inline]
pub(crate) fn mac_with_carry(
    a: BigDigit,
    b: BigDigit,
    c: BigDigit,
    acc: &mut DoubleBigDigit,
) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += (b as DoubleBigDigit) * (c as DoubleBigDigit);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// Multiply-accumulate a whole digit, `acc += b * c`  (HAC 14.12 inner loop)
///
/// The final carry keeps propagating through the tail of `acc`; callers
/// must leave at least one limb of headroom past `b`.
pub(crate) fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    debug_assert!(carry >> BITS == 0);
    let final_carry = __add2(a_hi, &[carry as BigDigit]);
    assert_eq!(final_carry, 0, "carry overflow during multiplication!");
}

impl Mpi {
    /// Signed multiplication, `self * rhs`  (HAC 14.12)
    pub fn mul_mpi(&self, rhs: &Mpi) -> Result<Mpi> {
        let i = self.significant_limbs();
        let j = rhs.significant_limbs();

        let mut x = Mpi::new();
        x.grow(i + j)?;

        for (k, &d) in rhs.limbs[..j].iter().enumerate() {
            mac_digit(&mut x.limbs[k..], &self.limbs[..i], d);
        }

        x.sign = if self.sign == rhs.sign {
            Sign::Plus
        } else {
            Sign::Minus
        };
        x.normalize_zero();

        Ok(x)
    }

    /// Multiplication by an unsigned machine integer, `self * b`.
    ///
    /// The sign of the result is the sign of `self`.
    pub fn mul_int(&self, b: BigDigit) -> Result<Mpi> {
        self.mul_mpi(&Mpi::from(b))
    }
}

forward_binop!(impl Mul, mul => mul_mpi, "mpi multiplication exceeded the limb cap");
forward_assign!(impl MulAssign, mul_assign => *);
