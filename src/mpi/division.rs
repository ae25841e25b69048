//! Long division with remainder.

use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::big_digit::{self, BigDigit, DoubleBigDigit, BITS};
use crate::mpi::multiplication::mac_with_carry;
use crate::mpi::{cmp_slice, Mpi, Sign};
use crate::{Error, Result};

/// Divide a two-limb value by a single limb, returning `(quotient,
/// remainder)`. Requires `hi < divisor` so the quotient fits one limb.
#[inline]
pub(crate) fn div_wide(hi: BigDigit, lo: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(hi < divisor);

    let lhs = big_digit::to_doublebigdigit(hi, lo);
    let rhs = divisor as DoubleBigDigit;
    ((lhs / rhs) as BigDigit, (lhs % rhs) as BigDigit)
}

impl Mpi {
    /// Division with remainder, `self = q * rhs + r`  (HAC 14.20)
    ///
    /// The quotient takes the product of the operand signs, the remainder
    /// the sign of `self`, and `|r| < |rhs|`. Fails with
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Mpi) -> Result<(Mpi, Mpi)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.cmp_abs(rhs) == Ordering::Less {
            return Ok((Mpi::new(), self.clone()));
        }

        let mut x = self.abs();
        let mut y = rhs.abs();

        let mut z = Mpi::new();
        z.grow(self.significant_limbs() + 2)?;

        // Normalize so that the top limb of the divisor has its high bits
        // populated, recording the shift to denormalize the remainder.
        let k = y.bits() % BITS;
        let k = if k < BITS - 1 {
            let k = BITS - 1 - k;
            x.shift_left(k)?;
            y.shift_left(k)?;
            k
        } else {
            0
        };

        let n = x.limbs.len() - 1;
        let t = y.limbs.len() - 1;
        y.shift_left(BITS * (n - t))?;

        while x.cmp_abs(&y) != Ordering::Less {
            z.limbs[n - t] += 1;
            x = x.sub_abs(&y)?;
        }
        y.shift_right(BITS * (n - t));

        for i in ((t + 1)..=n).rev() {
            // Estimate the quotient digit from the top limbs, then correct
            // it downward against a three-limb probe of the dividend.
            let mut qhat = if x.limb(i) >= y.limbs[t] {
                BigDigit::MAX
            } else {
                div_wide(x.limb(i), x.limb(i - 1), y.limbs[t]).0
            };

            let t2 = [
                if i >= 2 { x.limb(i - 2) } else { 0 },
                x.limb(i - 1),
                x.limb(i),
            ];

            qhat = qhat.wrapping_add(1);
            loop {
                qhat = qhat.wrapping_sub(1);

                let y1 = if t >= 1 { y.limbs[t - 1] } else { 0 };
                let mut t1 = [0; 3];
                let mut carry = 0;
                t1[0] = mac_with_carry(0, y1, qhat, &mut carry);
                t1[1] = mac_with_carry(0, y.limbs[t], qhat, &mut carry);
                t1[2] = carry as BigDigit;

                if cmp_slice(&t1, &t2) != Ordering::Greater {
                    break;
                }
            }

            let mut t1 = y.mul_int(qhat)?;
            t1.shift_left(BITS * (i - t - 1))?;
            x = x.sub_mpi(&t1)?;

            if x.cmp_int(0) == Ordering::Less {
                let mut t1 = y.clone();
                t1.shift_left(BITS * (i - t - 1))?;
                x = x.add_mpi(&t1)?;
                qhat = qhat.wrapping_sub(1);
            }

            z.limbs[i - t - 1] = qhat;
        }

        z.sign = if self.sign == rhs.sign {
            Sign::Plus
        } else {
            Sign::Minus
        };
        z.normalize_zero();

        x.shift_right(k);
        x.sign = self.sign;
        x.normalize_zero();

        Ok((z, x))
    }

    /// Division with remainder by a machine integer.
    pub fn div_int(&self, b: i64) -> Result<(Mpi, Mpi)> {
        self.div_rem(&Mpi::from(b))
    }

    /// The least non-negative residue, `self mod modulus`, in
    /// `[0, modulus)`. The modulus must be positive.
    pub fn rem_euclid(&self, modulus: &Mpi) -> Result<Mpi> {
        if modulus.cmp_int(0) == Ordering::Less {
            return Err(Error::NegativeValue);
        }

        let (_, mut r) = self.div_rem(modulus)?;

        while r.cmp_int(0) == Ordering::Less {
            r = r.add_mpi(modulus)?;
        }
        while r.cmp(modulus) != Ordering::Less {
            r = r.sub_mpi(modulus)?;
        }

        Ok(r)
    }

    /// Remainder modulo a machine integer, as a limb.
    ///
    /// A negative `self` is folded into `[0, b)`.
    pub fn mod_int(&self, b: i64) -> Result<BigDigit> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        if b < 0 {
            return Err(Error::NegativeValue);
        }

        // handle trivial cases
        if b == 1 {
            return Ok(0);
        }
        if b == 2 {
            return Ok(self.limb(0) & 1);
        }

        let b = b as BigDigit;
        let mut y: BigDigit = 0;
        for &d in self.limbs.iter().rev() {
            y = (big_digit::to_doublebigdigit(y, d) % b as DoubleBigDigit) as BigDigit;
        }

        if self.sign == Sign::Minus && y != 0 {
            y = b - y;
        }

        Ok(y)
    }

    /// Fused division and remainder by a single limb, on the magnitude.
    pub(crate) fn div_rem_digit(&self, d: BigDigit) -> (Mpi, BigDigit) {
        debug_assert!(d != 0);

        let mut q = Mpi {
            sign: self.sign,
            limbs: vec![0; self.significant_limbs()],
        };

        let mut rem = 0;
        for i in (0..q.limbs.len()).rev() {
            let (digit, r) = div_wide(rem, self.limbs[i], d);
            q.limbs[i] = digit;
            rem = r;
        }

        q.normalize_zero();
        (q, rem)
    }
}

impl Div<&Mpi> for &Mpi {
    type Output = Mpi;

    #[inline]
    fn div(self, rhs: &Mpi) -> Mpi {
        self.div_rem(rhs).expect("mpi division by zero").0
    }
}

impl Rem<&Mpi> for &Mpi {
    type Output = Mpi;

    #[inline]
    fn rem(self, rhs: &Mpi) -> Mpi {
        self.div_rem(rhs).expect("mpi division by zero").1
    }
}

macro_rules! forward_divrem_variants {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Mpi> for &Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp<&Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: &Mpi) -> Mpi {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(&self, &rhs)
            }
        }
    };
}

forward_divrem_variants!(impl Div, div);
forward_divrem_variants!(impl Rem, rem);
forward_assign!(impl DivAssign, div_assign => /);
forward_assign!(impl RemAssign, rem_assign => %);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::RandMpi;

    #[test]
    fn test_div_by_zero() {
        assert_eq!(Mpi::from(1).div_rem(&Mpi::new()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_div_smaller_dividend() {
        let (q, r) = Mpi::from(-5).div_rem(&Mpi::from(7)).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, Mpi::from(-5));
    }

    #[test]
    fn test_div_small_values() {
        let (q, r) = Mpi::from(23).div_rem(&Mpi::from(7)).unwrap();
        assert_eq!(q, Mpi::from(3));
        assert_eq!(r, Mpi::from(2));

        // Truncated division: quotient sign is the product of the operand
        // signs, remainder takes the dividend's sign.
        let (q, r) = Mpi::from(-23).div_rem(&Mpi::from(7)).unwrap();
        assert_eq!(q, Mpi::from(-3));
        assert_eq!(r, Mpi::from(-2));

        let (q, r) = Mpi::from(23).div_rem(&Mpi::from(-7)).unwrap();
        assert_eq!(q, Mpi::from(-3));
        assert_eq!(r, Mpi::from(2));
    }

    #[test]
    fn test_exact_division_remainder_positive() {
        let (q, r) = Mpi::from(-21).div_rem(&Mpi::from(7)).unwrap();
        assert_eq!(q, Mpi::from(-3));
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Plus);
    }

    #[test]
    fn test_division_identity_random() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for (asize, bsize) in [(16, 8), (33, 9), (64, 24), (17, 17), (40, 1)] {
            let a = rng.gen_mpi(asize).unwrap();
            let b = rng.gen_mpi(bsize).unwrap();
            if b.is_zero() {
                continue;
            }

            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + &r, a, "a = q*b + r for sizes {asize}/{bsize}");
            assert!(r.cmp_abs(&b) == Ordering::Less, "|r| < |b|");
        }
    }

    #[test]
    fn test_rem_euclid() {
        let m = Mpi::from(7);
        assert_eq!(Mpi::from(-5).rem_euclid(&m).unwrap(), Mpi::from(2));
        assert_eq!(Mpi::from(23).rem_euclid(&m).unwrap(), Mpi::from(2));
        assert_eq!(
            Mpi::from(1).rem_euclid(&Mpi::from(-7)),
            Err(Error::NegativeValue)
        );
    }

    #[test]
    fn test_mod_int() {
        assert_eq!(Mpi::from(100).mod_int(7).unwrap(), 2);
        assert_eq!(Mpi::from(-100).mod_int(7).unwrap(), 5);
        assert_eq!(Mpi::from(100).mod_int(1).unwrap(), 0);
        assert_eq!(Mpi::from(101).mod_int(2).unwrap(), 1);
        assert_eq!(Mpi::from(3).mod_int(0), Err(Error::DivisionByZero));
        assert_eq!(Mpi::from(3).mod_int(-5), Err(Error::NegativeValue));
    }

    #[test]
    fn test_mod_int_matches_div_rem() {
        let mut rng = XorShiftRng::from_seed([2u8; 16]);
        let a = rng.gen_mpi(40).unwrap();
        for b in [3i64, 17, 1 << 20, i64::MAX] {
            let (_, r) = a.div_rem(&Mpi::from(b)).unwrap();
            assert_eq!(r, Mpi::from(a.mod_int(b).unwrap() as i64));
        }
    }

    #[test]
    fn test_div_rem_digit() {
        let a = Mpi::from_str_radix("123456789abcdef0123456789", 16).unwrap();
        let (q, r) = a.div_rem_digit(10);
        let (q2, r2) = a.div_rem(&Mpi::from(10u64)).unwrap();
        assert_eq!(q, q2);
        assert_eq!(Mpi::from(r), r2);
    }

    #[test]
    fn test_operators() {
        let a = Mpi::from(100);
        let b = Mpi::from(9);
        assert_eq!(&a / &b, Mpi::from(11));
        assert_eq!(&a % &b, Mpi::from(1));

        let mut c = a.clone();
        c /= &b;
        assert_eq!(c, Mpi::from(11));
    }
}
