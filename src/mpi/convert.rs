//! Import and export: big-endian bytes, digit strings, formatting.

use core::fmt;
use core::str::FromStr;

use crate::big_digit::{BigDigit, BITS, BYTES};
use crate::mpi::{Mpi, Sign};
use crate::{Error, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Mpi {
    /// Import a magnitude from big-endian bytes. Leading zero bytes are
    /// stripped; the result is non-negative.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Mpi> {
        let n = bytes.iter().take_while(|&&b| b == 0).count();
        let bytes = &bytes[n..];

        let mut x = Mpi::new();
        x.grow(bytes.len().div_ceil(BYTES))?;

        for (j, &b) in bytes.iter().rev().enumerate() {
            x.limbs[j / BYTES] |= (b as BigDigit) << ((j % BYTES) * 8);
        }

        Ok(x)
    }

    /// Export the magnitude as big-endian bytes, without leading zeros.
    /// Zero exports as an empty vector.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut buf = vec![0; self.byte_len()];
        self.copy_bytes_be(&mut buf);
        buf
    }

    /// Export the magnitude into `buf`, left-padded with zeros to fill it
    /// exactly. Fails with [`Error::BufferTooSmall`] when `buf` is shorter
    /// than [`byte_len`](Mpi::byte_len).
    pub fn write_bytes_be(&self, buf: &mut [u8]) -> Result<()> {
        if buf.len() < self.byte_len() {
            return Err(Error::BufferTooSmall);
        }

        buf.fill(0);
        self.copy_bytes_be(buf);
        Ok(())
    }

    /// `buf` holds at least `byte_len()` zeroed bytes.
    fn copy_bytes_be(&self, buf: &mut [u8]) {
        let mut i = buf.len();
        for j in 0..self.byte_len() {
            i -= 1;
            buf[i] = (self.limbs[j / BYTES] >> ((j % BYTES) * 8)) as u8;
        }
    }

    /// Parse a digit string in the given radix (2 to 16). A leading `'-'`
    /// marks a negative value.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Mpi> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, s),
        };
        if digits.is_empty() {
            return Err(Error::InvalidCharacter);
        }

        let mut x = Mpi::new();

        if radix == 16 {
            // Hex digits map to nibbles directly, least significant first.
            x.grow((digits.len() * 4).div_ceil(BITS))?;

            for (j, c) in digits.bytes().rev().enumerate() {
                let d = (c as char)
                    .to_digit(16)
                    .ok_or(Error::InvalidCharacter)?;
                x.limbs[j / (2 * BYTES)] |= (d as BigDigit) << ((j % (2 * BYTES)) * 4);
            }
        } else {
            for c in digits.bytes() {
                let d = (c as char)
                    .to_digit(radix)
                    .ok_or(Error::InvalidCharacter)?;
                x = x.mul_int(radix as BigDigit)?;
                x = x.add_int(d as i64)?;
            }
        }

        x.sign = sign;
        x.normalize_zero();

        Ok(x)
    }

    /// Render as a digit string in the given radix (2 to 16), lowercase,
    /// without leading zeros. Zero renders as `"0"`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        if !(2..=16).contains(&radix) {
            return Err(Error::BadInput);
        }

        if self.is_zero() {
            return Ok("0".to_owned());
        }

        let mut s = String::new();
        if self.sign == Sign::Minus {
            s.push('-');
        }

        if radix == 16 {
            // Walk the limbs from the top, emitting nibbles once the first
            // non-zero one has been seen.
            let mut seen = false;
            for &limb in self.limbs[..self.significant_limbs()].iter().rev() {
                for shift in (0..BITS / 4).rev() {
                    let nib = ((limb >> (shift * 4)) & 0xf) as usize;
                    if nib == 0 && !seen {
                        continue;
                    }
                    seen = true;
                    s.push(DIGITS[nib] as char);
                }
            }
        } else {
            let mut t = self.abs();
            let mut digits = Vec::new();
            while !t.is_zero() {
                let (q, r) = t.div_rem_digit(radix as BigDigit);
                digits.push(DIGITS[r as usize]);
                t = q;
            }
            s.extend(digits.iter().rev().map(|&d| d as char));
        }

        Ok(s)
    }
}

impl FromStr for Mpi {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Mpi> {
        Mpi::from_str_radix(s, 10)
    }
}

impl fmt::Display for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.abs().to_str_radix(10).map_err(|_| fmt::Error)?;
        f.pad_integral(self.sign() == Sign::Plus, "", &s)
    }
}

impl fmt::LowerHex for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.abs().to_str_radix(16).map_err(|_| fmt::Error)?;
        f.pad_integral(self.sign() == Sign::Plus, "0x", &s)
    }
}

impl fmt::UpperHex for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.abs().to_str_radix(16).map_err(|_| fmt::Error)?;
        s.make_ascii_uppercase();
        f.pad_integral(self.sign() == Sign::Plus, "0x", &s)
    }
}
