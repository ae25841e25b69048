//! Montgomery reduction and sliding-window modular exponentiation.

use core::cmp::Ordering;

use crate::big_digit::{BigDigit, BITS};
use crate::mpi::multiplication::mac_digit;
use crate::mpi::subtraction::__sub2;
use crate::mpi::{cmp_slice, Mpi, Sign};
use crate::{Error, Result};

/// Largest window the exponentiation will use; each increment doubles the
/// size of the precomputed table.
const MAX_WINDOW_SIZE: usize = 6;

/// Cached `R^2 mod N` for repeated exponentiations with the same modulus.
///
/// Passing the same cache to [`Mpi::exp_mod_with`] amortizes the reduction
/// constant across calls. The cache is only valid for one modulus; reusing
/// it with another gives wrong results.
#[derive(Clone, Debug, Default)]
pub struct ExpModCache {
    rr: Mpi,
}

/// Montgomery initialization: `-N^-1 mod 2^BITS` from the low limb of the
/// modulus, by lifting a 2-adic inverse seed with Newton's iteration.
pub(crate) fn montg_init(m0: BigDigit) -> BigDigit {
    let mut x = m0;
    x = x.wrapping_add((m0.wrapping_add(2) & 4) << 1);

    let mut i = BITS;
    while i >= 8 {
        x = x.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(x)));
        i /= 2;
    }

    x.wrapping_neg()
}

/// Montgomery multiplication: `a = a * b * R^-1 mod n`  (HAC 14.36)
///
/// `a` must hold at least `n.len() + 1` limbs and be below `n`; `t` is a
/// zeroed-on-entry scratch of at least `2 * n.len() + 2` limbs. The final
/// conditional subtraction is balanced: when no subtraction is needed an
/// equal-shape dummy subtract runs against the scratch buffer instead.
pub(crate) fn montmul(a: &mut Mpi, b: &[BigDigit], n: &[BigDigit], mm: BigDigit, t: &mut Mpi) {
    t.limbs.fill(0);

    let nn = n.len();
    let m = b.len().min(nn);
    let b0 = b.first().copied().unwrap_or(0);

    debug_assert!(a.limbs.len() >= nn + 1);
    debug_assert!(t.limbs.len() >= 2 * nn + 2);

    for i in 0..nn {
        // T = (T + u0*B + u1*N) / 2^BITS
        let u0 = a.limbs[i];
        let u1 = t.limbs[i]
            .wrapping_add(u0.wrapping_mul(b0))
            .wrapping_mul(mm);

        mac_digit(&mut t.limbs[i..], &b[..m], u0);
        mac_digit(&mut t.limbs[i..], n, u1);
    }

    a.limbs[..nn + 1].copy_from_slice(&t.limbs[nn..2 * nn + 1]);
    for d in &mut a.limbs[nn + 1..] {
        *d = 0;
    }

    if cmp_slice(&a.limbs, n) != Ordering::Less {
        let borrow = __sub2(&mut a.limbs, n);
        debug_assert_eq!(borrow, 0);
    } else {
        // prevent timing attacks
        let _ = __sub2(&mut t.limbs, &a.limbs[..nn]);
    }
}

/// Montgomery squaring, `a = a^2 * R^-1 mod n`.
pub(crate) fn montsqr(a: &mut Mpi, n: &[BigDigit], mm: BigDigit, t: &mut Mpi) {
    let b = a.limbs.clone();
    montmul(a, &b, n, mm, t);
}

/// Montgomery reduction: `a = a * R^-1 mod n`, leaving Montgomery form.
pub(crate) fn montred(a: &mut Mpi, n: &[BigDigit], mm: BigDigit, t: &mut Mpi) {
    montmul(a, &[1], n, mm, t);
}

fn compute_rr(modulus: &Mpi, nn: usize) -> Result<Mpi> {
    let mut rr = Mpi::new();
    rr.set_int(1)?;
    rr.shift_left(nn * 2 * BITS)?;
    rr.rem_euclid(modulus)
}

impl Mpi {
    /// Modular exponentiation, `self^exponent mod modulus`  (HAC 14.85)
    ///
    /// The modulus must be positive and odd, the exponent non-negative;
    /// otherwise [`Error::BadInput`]. The result is in `[0, modulus)`.
    ///
    /// Exponent bits are consumed through a sliding window driven by
    /// Montgomery multiplications; the window size follows the exponent's
    /// bit length, up to `2^5` precomputed odd powers.
    pub fn exp_mod(&self, exponent: &Mpi, modulus: &Mpi) -> Result<Mpi> {
        self.exp_mod_inner(exponent, modulus, None)
    }

    /// [`exp_mod`](Mpi::exp_mod) with a caller-owned cache for
    /// `R^2 mod modulus`, filled on first use.
    pub fn exp_mod_with(
        &self,
        exponent: &Mpi,
        modulus: &Mpi,
        cache: &mut ExpModCache,
    ) -> Result<Mpi> {
        self.exp_mod_inner(exponent, modulus, Some(cache))
    }

    fn exp_mod_inner(
        &self,
        exponent: &Mpi,
        modulus: &Mpi,
        cache: Option<&mut ExpModCache>,
    ) -> Result<Mpi> {
        if modulus.sign == Sign::Minus || modulus.limb(0) & 1 == 0 {
            return Err(Error::BadInput);
        }
        if exponent.sign() == Sign::Minus {
            return Err(Error::BadInput);
        }

        let nn = modulus.significant_limbs();
        let n_limbs = &modulus.limbs[..nn];
        let mm = montg_init(n_limbs[0]);

        let i = exponent.bits();
        let mut wsize = if i > 671 {
            6
        } else if i > 239 {
            5
        } else if i > 79 {
            4
        } else if i > 23 {
            3
        } else {
            1
        };
        if wsize > MAX_WINDOW_SIZE {
            wsize = MAX_WINDOW_SIZE;
        }

        let j = nn + 1;
        let mut x = Mpi::new();
        x.grow(j)?;
        let mut t = Mpi::new();
        t.grow(j * 2)?;

        // Compensate for a negative base, corrected again at the end.
        let apos;
        let base = if self.sign == Sign::Minus {
            apos = self.abs();
            &apos
        } else {
            self
        };

        // R^2 mod N: computed on first use, or taken from the cache.
        let mut rr_local = None;
        let rr: &Mpi = match cache {
            Some(c) => {
                if c.rr.is_zero() {
                    c.rr = compute_rr(modulus, nn)?;
                }
                &c.rr
            }
            None => &*rr_local.insert(compute_rr(modulus, nn)?),
        };

        // W[1] = A * R^2 * R^-1 mod N = A * R mod N
        let mut w1 = if base.cmp(modulus) != Ordering::Less {
            base.rem_euclid(modulus)?
        } else {
            base.clone()
        };
        w1.grow(j)?;
        montmul(&mut w1, &rr.limbs, n_limbs, mm, &mut t);

        // X = R^2 * R^-1 mod N = R mod N
        x.clone_from(rr);
        x.grow(j)?;
        montred(&mut x, n_limbs, mm, &mut t);

        // Precompute the table of odd powers W[2^(wsize-1)] .. W[2^wsize - 1].
        let mut w: Vec<Mpi> = Vec::new();
        if wsize > 1 {
            w = vec![Mpi::new(); 1 << wsize];

            let j0 = 1 << (wsize - 1);
            w[j0].clone_from(&w1);
            w[j0].grow(j)?;
            for _ in 0..wsize - 1 {
                montsqr(&mut w[j0], n_limbs, mm, &mut t);
            }

            for idx in j0 + 1..(1 << wsize) {
                let prev = w[idx - 1].clone();
                let slot = &mut w[idx];
                *slot = prev;
                slot.grow(j)?;
                montmul(slot, &w1.limbs, n_limbs, mm, &mut t);
            }
        }

        // Scan the exponent MSB-first: skip leading zeros, square through
        // zero runs, collect up to wsize bits per window.
        let mut nblimbs = exponent.limbs.len();
        let mut bufsize = 0;
        let mut nbits = 0;
        let mut wbits: usize = 0;
        let mut state = 0;

        loop {
            if bufsize == 0 {
                if nblimbs == 0 {
                    break;
                }
                nblimbs -= 1;
                bufsize = BITS;
            }

            bufsize -= 1;
            let ei = (exponent.limbs[nblimbs] >> bufsize) & 1;

            if ei == 0 && state == 0 {
                continue;
            }

            if ei == 0 && state == 1 {
                // out of window, square X
                montsqr(&mut x, n_limbs, mm, &mut t);
                continue;
            }

            // add ei to the current window
            state = 2;
            nbits += 1;
            wbits |= (ei as usize) << (wsize - nbits);

            if nbits == wsize {
                for _ in 0..wsize {
                    montsqr(&mut x, n_limbs, mm, &mut t);
                }

                let table = if wsize == 1 { &w1 } else { &w[wbits] };
                montmul(&mut x, &table.limbs, n_limbs, mm, &mut t);

                state = 1;
                nbits = 0;
                wbits = 0;
            }
        }

        // Flush a partial window one bit at a time.
        for _ in 0..nbits {
            montsqr(&mut x, n_limbs, mm, &mut t);

            wbits <<= 1;
            if wbits & (1 << wsize) != 0 {
                montmul(&mut x, &w1.limbs, n_limbs, mm, &mut t);
            }
        }

        // X = A^E * R * R^-1 mod N = A^E mod N
        montred(&mut x, n_limbs, mm, &mut t);

        if self.sign == Sign::Minus && exponent.bit(0) && !x.is_zero() {
            x.sign = Sign::Minus;
            x = modulus.add_mpi(&x)?;
        }

        Ok(x)
    }
}
