//! The multi-precision integer value and its lifecycle.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::Neg;

use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::big_digit::{self, BigDigit};
use crate::{Error, Result, MAX_LIMBS};

pub(crate) mod addition;
pub(crate) mod convert;
pub(crate) mod division;
pub(crate) mod monty;
pub(crate) mod multiplication;
pub(crate) mod shift;
pub(crate) mod subtraction;

/// The sign of an [`Mpi`].
///
/// Zero always carries `Plus`; no operation leaves a negative zero behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// An arbitrary-precision signed integer in sign-magnitude form.
///
/// The magnitude is a little-endian vector of [`BigDigit`] limbs. High zero
/// limbs are tolerated: comparisons and bit queries work on the significant
/// prefix, and [`grow`](Mpi::grow) may leave zero padding behind. The limb
/// buffer is wiped when the value is dropped or reallocated.
pub struct Mpi {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<BigDigit>,
}

impl Mpi {
    /// Create a new `Mpi` with value zero and no allocated limbs.
    #[inline]
    pub fn new() -> Mpi {
        Mpi {
            sign: Sign::Plus,
            limbs: Vec::new(),
        }
    }

    /// The sign of the value. Zero reports `Plus`.
    #[inline]
    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Plus
        } else {
            self.sign
        }
    }

    /// Whether the value is numerically zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&d| d == 0)
    }

    /// Reset to zero in place, keeping the allocation.
    pub fn set_zero(&mut self) {
        self.limbs.fill(0);
        self.sign = Sign::Plus;
    }

    /// The absolute value.
    pub fn abs(&self) -> Mpi {
        let mut x = self.clone();
        x.sign = Sign::Plus;
        x
    }

    /// Ensure at least `nblimbs` limbs are allocated.
    ///
    /// Existing content is preserved and new limbs are zero. The old buffer
    /// is wiped before release. Fails with [`Error::AllocFailed`] past
    /// [`MAX_LIMBS`].
    pub fn grow(&mut self, nblimbs: usize) -> Result<()> {
        if nblimbs > MAX_LIMBS {
            return Err(Error::AllocFailed);
        }

        if self.limbs.len() < nblimbs {
            let mut p = vec![0; nblimbs];
            p[..self.limbs.len()].copy_from_slice(&self.limbs);
            let mut old = mem::replace(&mut self.limbs, p);
            old.zeroize();
        }

        Ok(())
    }

    /// Set the value from a machine integer, reusing the allocation.
    pub fn set_int(&mut self, z: i64) -> Result<()> {
        self.grow(1)?;
        self.limbs.fill(0);
        self.limbs[0] = z.unsigned_abs();
        self.sign = if z < 0 { Sign::Minus } else { Sign::Plus };
        Ok(())
    }

    /// Compare magnitudes, ignoring signs.
    pub fn cmp_abs(&self, other: &Mpi) -> Ordering {
        cmp_slice(&self.limbs, &other.limbs)
    }

    /// Compare against a machine integer.
    pub fn cmp_int(&self, z: i64) -> Ordering {
        self.cmp(&Mpi::from(z))
    }

    /// Index of the least-significant set bit; 0 if the value is zero.
    pub fn lsb(&self) -> usize {
        for (i, &d) in self.limbs.iter().enumerate() {
            if d != 0 {
                return i * big_digit::BITS + d.trailing_zeros() as usize;
            }
        }

        0
    }

    /// One-based index of the most-significant set bit; 0 if the value is
    /// zero. This is the bit length of the magnitude.
    pub fn bits(&self) -> usize {
        let i = self.significant_limbs();
        if i == 0 {
            0
        } else {
            i * big_digit::BITS - self.limbs[i - 1].leading_zeros() as usize
        }
    }

    /// The magnitude size in bytes, `ceil(bits / 8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8)
    }

    /// The value of the bit at `pos` in the magnitude.
    pub fn bit(&self, pos: usize) -> bool {
        let (limb, off) = pos.div_rem(&big_digit::BITS);
        match self.limbs.get(limb) {
            Some(&d) => (d >> off) & 1 == 1,
            None => false,
        }
    }

    /// Set or clear the bit at `pos` in the magnitude, growing on demand.
    ///
    /// Clearing a bit past the allocated limbs is a no-op.
    pub fn set_bit(&mut self, pos: usize, value: bool) -> Result<()> {
        let (off, idx) = pos.div_rem(&big_digit::BITS);

        if off >= self.limbs.len() {
            if !value {
                return Ok(());
            }
            self.grow(off + 1)?;
        }

        self.limbs[off] = (self.limbs[off] & !(1 << idx)) | ((value as BigDigit) << idx);
        self.normalize_zero();
        Ok(())
    }

    /// Number of limbs up to and including the top non-zero limb.
    pub(crate) fn significant_limbs(&self) -> usize {
        significant(&self.limbs)
    }

    /// The limb at `i`, reading past the allocation as zero.
    pub(crate) fn limb(&self, i: usize) -> BigDigit {
        self.limbs.get(i).copied().unwrap_or(0)
    }

    /// Restore the zero-is-positive invariant after a sign assignment.
    pub(crate) fn normalize_zero(&mut self) {
        if self.sign == Sign::Minus && self.is_zero() {
            self.sign = Sign::Plus;
        }
    }
}

/// Limbs up to and including the top non-zero one.
#[inline]
pub(crate) fn significant(limbs: &[BigDigit]) -> usize {
    limbs.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// Compare two little-endian limb slices as magnitudes, ignoring high zero
/// limbs on either side.
pub(crate) fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    let a = &a[..significant(a)];
    let b = &b[..significant(b)];

    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        other => other,
    }
}

impl Default for Mpi {
    #[inline]
    fn default() -> Mpi {
        Mpi::new()
    }
}

impl Clone for Mpi {
    /// Cloning keeps only the significant prefix of the limb buffer.
    fn clone(&self) -> Mpi {
        let i = self.significant_limbs();
        Mpi {
            sign: if i == 0 { Sign::Plus } else { self.sign },
            limbs: self.limbs[..i].to_vec(),
        }
    }

    fn clone_from(&mut self, source: &Mpi) {
        let i = source.significant_limbs();
        self.limbs.zeroize();
        self.limbs.clear();
        self.limbs.extend_from_slice(&source.limbs[..i]);
        self.sign = if i == 0 { Sign::Plus } else { source.sign };
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        self.limbs.zeroize();
    }
}

impl Zeroize for Mpi {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.limbs.clear();
        self.sign = Sign::Plus;
    }
}

impl PartialEq for Mpi {
    #[inline]
    fn eq(&self, other: &Mpi) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Mpi {}

impl PartialOrd for Mpi {
    #[inline]
    fn partial_cmp(&self, other: &Mpi) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mpi {
    fn cmp(&self, other: &Mpi) -> Ordering {
        let i = self.significant_limbs();
        let j = other.significant_limbs();

        if i == 0 && j == 0 {
            return Ordering::Equal;
        }

        // A longer magnitude decides by the sign of its owner.
        if i != j {
            let (longer, sign) = if i > j {
                (Ordering::Greater, self.sign)
            } else {
                (Ordering::Less, other.sign)
            };
            return if sign == Sign::Plus {
                longer
            } else {
                longer.reverse()
            };
        }

        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => cmp_slice(&self.limbs[..i], &other.limbs[..j]),
            (Sign::Minus, Sign::Minus) => cmp_slice(&self.limbs[..i], &other.limbs[..j]).reverse(),
        }
    }
}

impl Hash for Mpi {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let i = self.significant_limbs();
        let sign = if i == 0 { Sign::Plus } else { self.sign };
        sign.hash(state);
        self.limbs[..i].hash(state);
    }
}

impl fmt::Debug for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpi({self:#x})")
    }
}

impl Neg for Mpi {
    type Output = Mpi;

    fn neg(mut self) -> Mpi {
        self.sign = -self.sign;
        self.normalize_zero();
        self
    }
}

impl Neg for &Mpi {
    type Output = Mpi;

    fn neg(self) -> Mpi {
        -self.clone()
    }
}

impl From<u64> for Mpi {
    fn from(v: u64) -> Mpi {
        Mpi {
            sign: Sign::Plus,
            limbs: if v == 0 { Vec::new() } else { vec![v] },
        }
    }
}

impl From<i64> for Mpi {
    fn from(v: i64) -> Mpi {
        let mut x = Mpi::from(v.unsigned_abs());
        if v < 0 {
            x.sign = Sign::Minus;
        }
        x
    }
}

impl From<u32> for Mpi {
    #[inline]
    fn from(v: u32) -> Mpi {
        Mpi::from(v as u64)
    }
}

impl From<i32> for Mpi {
    #[inline]
    fn from(v: i32) -> Mpi {
        Mpi::from(v as i64)
    }
}

impl Zero for Mpi {
    #[inline]
    fn zero() -> Mpi {
        Mpi::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Mpi::is_zero(self)
    }
}

impl One for Mpi {
    #[inline]
    fn one() -> Mpi {
        Mpi::from(1u64)
    }
}
