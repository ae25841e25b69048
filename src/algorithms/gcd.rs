//! Binary greatest common divisor.

use core::cmp::Ordering;

use crate::{Mpi, Result};

/// GCD sets the result to the greatest common divisor of `a` and `b`,
/// computed by the binary algorithm (HAC 14.54).
///
/// Signs are ignored; the result is always non-negative. Following the
/// shift-and-subtract recurrence, `gcd(a, 0)` reduces to zero.
pub fn gcd(a: &Mpi, b: &Mpi) -> Result<Mpi> {
    let mut ta = a.abs();
    let mut tb = b.abs();

    // Factor out the common power of two up front, put it back at the end.
    let lz = ta.lsb().min(tb.lsb());
    ta.shift_right(lz);
    tb.shift_right(lz);

    while !ta.is_zero() {
        ta.shift_right(ta.lsb());
        tb.shift_right(tb.lsb());

        if ta.cmp(&tb) != Ordering::Less {
            ta = ta.sub_abs(&tb)?;
            ta.shift_right(1);
        } else {
            tb = tb.sub_abs(&ta)?;
            tb.shift_right(1);
        }
    }

    tb.shift_left(lz)?;
    Ok(tb)
}

impl Mpi {
    /// The greatest common divisor of `self` and `other`.
    #[inline]
    pub fn gcd(&self, other: &Mpi) -> Result<Mpi> {
        gcd(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::RandMpi;

    #[test]
    fn test_gcd_known_pairs() {
        let pairs: [(i64, i64, i64); 3] = [
            (693, 609, 21),
            (1764, 868, 28),
            (768_454_923, 542_167_814, 1),
        ];

        for (a, b, g) in pairs {
            assert_eq!(
                Mpi::from(a).gcd(&Mpi::from(b)).unwrap(),
                Mpi::from(g),
                "gcd({a}, {b})"
            );
        }
    }

    #[test]
    fn test_gcd_ignores_signs() {
        assert_eq!(Mpi::from(-12).gcd(&Mpi::from(18)).unwrap(), Mpi::from(6));
        assert_eq!(Mpi::from(-12).gcd(&Mpi::from(-18)).unwrap(), Mpi::from(6));
    }

    #[test]
    fn test_gcd_common_power_of_two() {
        let a = Mpi::from(3 << 20);
        let b = Mpi::from(5 << 20);
        assert_eq!(a.gcd(&b).unwrap(), Mpi::from(1 << 20));
    }

    #[test]
    fn test_gcd_divides_both() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);
        for size in [4usize, 16, 40] {
            let a = rng.gen_mpi(size).unwrap();
            let b = rng.gen_mpi(size).unwrap();
            if a.is_zero() || b.is_zero() {
                continue;
            }

            let g = a.gcd(&b).unwrap();
            assert!(a.rem_euclid(&g).unwrap().is_zero(), "g | a for size {size}");
            assert!(b.rem_euclid(&g).unwrap().is_zero(), "g | b for size {size}");
        }
    }

    #[test]
    fn test_gcd_times_lcm_is_product() {
        let mut rng = XorShiftRng::from_seed([2u8; 16]);
        let a = rng.gen_mpi(12).unwrap();
        let b = rng.gen_mpi(12).unwrap();

        let g = a.gcd(&b).unwrap();
        let lcm = (&a * &b).div_rem(&g).unwrap().0;
        assert_eq!(&g * &lcm, &a * &b);
    }
}
