//! Unsigned and signed addition.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};
use crate::mpi::Mpi;
use crate::Result;

/// Add with carry: returns the low limb of `a + b + *acc`, leaving the
/// carry in `*acc`.
#[inline]
pub(crate) fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += b as DoubleBigDigit;
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the carry out.
///
/// `a` must be at least as long as `b`; the carry keeps propagating through
/// the tail of `a` until it dies out or falls off the end.
pub(crate) fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as BigDigit
}

impl Mpi {
    /// `|self| + |rhs|`  (HAC 14.7)
    ///
    /// The result is always non-negative.
    pub fn add_abs(&self, rhs: &Mpi) -> Result<Mpi> {
        let mut x = self.abs();
        let j = rhs.significant_limbs();
        x.grow(j)?;

        let carry = __add2(&mut x.limbs, &rhs.limbs[..j]);
        if carry != 0 {
            let i = x.limbs.len();
            x.grow(i + 1)?;
            x.limbs[i] = carry;
        }

        Ok(x)
    }

    /// Signed addition, `self + rhs`.
    pub fn add_mpi(&self, rhs: &Mpi) -> Result<Mpi> {
        let s = self.sign;

        let mut x = if self.sign != rhs.sign {
            // Opposite signs: subtract the smaller magnitude from the
            // larger, the larger operand decides the sign.
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

    /// Signed addition of a machine integer, `self + b`.
    pub fn add_int(&self, b: i64) -> Result<Mpi> {
        self.add_mpi(&Mpi::from(b))
    }
}

forward_binop!(impl Add, add => add_mpi, "mpi addition exceeded the limb cap");
forward_assign!(impl AddAssign, add_assign => +);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_digit;
    use crate::Sign;

    #[test]
    fn test_add_abs_carry_chain() {
        // All-ones magnitude plus one ripples a carry into a fresh limb.
        let a = Mpi {
            sign: Sign::Plus,
            limbs: vec![BigDigit::MAX; 3],
        };
        let x = a.add_abs(&Mpi::from(1u64)).unwrap();
        assert_eq!(x.bits(), 3 * big_digit::BITS + 1);
        assert_eq!(x.lsb(), 3 * big_digit::BITS);
    }

    #[test]
    fn test_add_abs_ignores_signs() {
        let a = Mpi::from(-5);
        let b = Mpi::from(-7);
        assert_eq!(a.add_abs(&b).unwrap(), Mpi::from(12));
    }

    #[test]
    fn test_add_signed_dispatch() {
        assert_eq!(Mpi::from(5) + Mpi::from(7), Mpi::from(12));
        assert_eq!(Mpi::from(5) + Mpi::from(-7), Mpi::from(-2));
        assert_eq!(Mpi::from(-5) + Mpi::from(7), Mpi::from(2));
        assert_eq!(Mpi::from(-5) + Mpi::from(-7), Mpi::from(-12));
    }

    #[test]
    fn test_add_to_zero_is_positive() {
        let x = Mpi::from(-3) + Mpi::from(3);
        assert!(x.is_zero());
        assert_eq!(x.sign(), Sign::Plus);
    }

    #[test]
    fn test_add_assign() {
        let mut x = Mpi::from(1);
        x += Mpi::from(41);
        assert_eq!(x, Mpi::from(42));
    }

    #[test]
    fn test_add_int() {
        assert_eq!(Mpi::from(40).add_int(2).unwrap(), Mpi::from(42));
        assert_eq!(Mpi::from(40).add_int(-41).unwrap(), Mpi::from(-1));
    }

    #[test]
    fn test_add_associative() {
        use rand::SeedableRng;
        use rand_xorshift::XorShiftRng;

        use crate::RandMpi;

        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        let a = rng.gen_mpi(40).unwrap();
        let b = rng.gen_mpi(24).unwrap();
        let c = rng.gen_mpi(56).unwrap();
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
    }
}
