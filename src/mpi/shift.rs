//! In-place bitwise shifts.

use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_integer::Integer;

use crate::big_digit::BITS;
use crate::mpi::Mpi;
use crate::Result;

impl Mpi {
    /// Shift left in place, `self <<= count`, growing to hold the result.
    pub fn shift_left(&mut self, count: usize) -> Result<()> {
        let (v0, t1) = count.div_rem(&BITS);

        let i = self.bits() + count;
        if self.limbs.len() * BITS < i {
            self.grow(i.div_ceil(BITS))?;
        }

        // shift by count / limb_size
        if v0 > 0 {
            for i in (v0..self.limbs.len()).rev() {
                self.limbs[i] = self.limbs[i - v0];
            }
            for d in &mut self.limbs[..v0] {
                *d = 0;
            }
        }

        // shift by count % limb_size
        if t1 > 0 {
            let mut r0 = 0;
            for d in &mut self.limbs[v0..] {
                let r1 = *d >> (BITS - t1);
                *d = (*d << t1) | r0;
                r0 = r1;
            }
        }

        Ok(())
    }

    /// Shift right in place, `self >>= count`. Shifting everything out
    /// leaves zero.
    pub fn shift_right(&mut self, count: usize) {
        let (v0, v1) = count.div_rem(&BITS);

        if v0 >= self.limbs.len() {
            self.set_zero();
            return;
        }

        // shift by count / limb_size
        if v0 > 0 {
            let n = self.limbs.len();
            for i in 0..n - v0 {
                self.limbs[i] = self.limbs[i + v0];
            }
            for d in &mut self.limbs[n - v0..] {
                *d = 0;
            }
        }

        // shift by count % limb_size
        if v1 > 0 {
            let mut r0 = 0;
            for d in self.limbs.iter_mut().rev() {
                let r1 = *d << (BITS - v1);
                *d = (*d >> v1) | r0;
                r0 = r1;
            }
        }

        self.normalize_zero();
    }
}

impl Shl<usize> for &Mpi {
    type Output = Mpi;

    fn shl(self, count: usize) -> Mpi {
        let mut x = self.clone();
        x.shift_left(count).expect("mpi shift exceeded the limb cap");
        x
    }
}

impl Shl<usize> for Mpi {
    type Output = Mpi;

    #[inline]
    fn shl(self, count: usize) -> Mpi {
        (&self) << count
    }
}

impl ShlAssign<usize> for Mpi {
    #[inline]
    fn shl_assign(&mut self, count: usize) {
        self.shift_left(count)
            .expect("mpi shift exceeded the limb cap");
    }
}

impl Shr<usize> for &Mpi {
    type Output = Mpi;

    fn shr(self, count: usize) -> Mpi {
        let mut x = self.clone();
        x.shift_right(count);
        x
    }
}

impl Shr<usize> for Mpi {
    type Output = Mpi;

    #[inline]
    fn shr(self, count: usize) -> Mpi {
        (&self) >> count
    }
}

impl ShrAssign<usize> for Mpi {
    #[inline]
    fn shr_assign(&mut self, count: usize) {
        self.shift_right(count);
    }
}
