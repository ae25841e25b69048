//! Modular multiplicative inverse.

use core::cmp::Ordering;

use crate::algorithms::gcd;
use crate::{Error, Mpi, Result};

/// Computes the modular inverse `x` with `a * x == 1 (mod n)`, by the
/// extended binary GCD (HAC 14.61 / 14.64).
///
/// The modulus must be greater than one, otherwise [`Error::BadInput`].
/// Fails with [`Error::NotAcceptable`] when `gcd(a, n) != 1` and no inverse
/// exists. The result is in `[0, n)`.
pub fn mod_inverse(a: &Mpi, n: &Mpi) -> Result<Mpi> {
    if n.cmp_int(1) != Ordering::Greater {
        return Err(Error::BadInput);
    }

    let g = gcd(a, n)?;
    if g.cmp_int(1) != Ordering::Equal {
        return Err(Error::NotAcceptable);
    }

    let ta = a.rem_euclid(n)?;
    let mut tu = ta.clone();
    let tb = n.clone();
    let mut tv = n.clone();

    let mut u1 = Mpi::from(1);
    let mut u2 = Mpi::from(0);
    let mut v1 = Mpi::from(0);
    let mut v2 = Mpi::from(1);

    loop {
        // Halve TU while it is even, keeping u1*a + u2*n == tu invariant
        // by a parity correction before each halving.
        while !tu.bit(0) {
            tu.shift_right(1);

            if u1.bit(0) || u2.bit(0) {
                u1 = u1.add_mpi(&tb)?;
                u2 = u2.sub_mpi(&ta)?;
            }

            u1.shift_right(1);
            u2.shift_right(1);
        }

        while !tv.bit(0) {
            tv.shift_right(1);

            if v1.bit(0) || v2.bit(0) {
                v1 = v1.add_mpi(&tb)?;
                v2 = v2.sub_mpi(&ta)?;
            }

            v1.shift_right(1);
            v2.shift_right(1);
        }

        if tu.cmp(&tv) != Ordering::Less {
            tu = tu.sub_mpi(&tv)?;
            u1 = u1.sub_mpi(&v1)?;
            u2 = u2.sub_mpi(&v2)?;
        } else {
            tv = tv.sub_mpi(&tu)?;
            v1 = v1.sub_mpi(&u1)?;
            v2 = v2.sub_mpi(&u2)?;
        }

        if tu.is_zero() {
            break;
        }
    }

    let mut x = v1;
    while x.cmp_int(0) == Ordering::Less {
        x = x.add_mpi(n)?;
    }
    while x.cmp(n) != Ordering::Less {
        x = x.sub_mpi(n)?;
    }

    Ok(x)
}

impl Mpi {
    /// The inverse of `self` modulo `n`, when it exists.
    #[inline]
    pub fn inv_mod(&self, n: &Mpi) -> Result<Mpi> {
        mod_inverse(self, n)
    }
}
