// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Arithmetic over a prime field whose modulus is only known at runtime.
//!
//! Elements are plain [`BigUint`]s kept in canonical form `[0, p)`; every
//! operation goes through the [`PrimeField`] that owns the modulus, so a
//! single element type serves any configured field.

use crate::{errors::RescueError, param::ALPHA};
use ark_std::{fmt, format, string::ToString};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Num, One, Zero};

/// 1 + 407 * 2^119
pub const DEFAULT_MODULUS: u128 = 270497897142230380135924736767050121217;
/// Generator of the multiplicative group of the default field.
pub const DEFAULT_PRIMITIVE_ELEMENT: u128 = 2;
/// 5^{-1} mod (DEFAULT_MODULUS - 1)
const DEFAULT_INVERSE_EXPONENT: u128 = 216398317713784304108739789413640096973;

/// An element of a [`PrimeField`], always reduced into `[0, p)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(pub(crate) BigUint);

impl FieldElement {
    /// Canonical integer representation of this element.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parameters of a prime field: the modulus `p`, a primitive element and the
/// exponent inverting the `x^ALPHA` S-box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    primitive_element: FieldElement,
    inverse_exponent: BigUint,
}

impl PrimeField {
    /// Build a field from its modulus and primitive element.
    ///
    /// Primality of `modulus` is not checked, and neither is the order of
    /// `primitive_element`; both are the caller's responsibility. What is
    /// rejected here:
    /// - a modulus smaller than 3 or even
    /// - a primitive element congruent to 0 or 1
    /// - a modulus for which `x^ALPHA` is not a permutation, i.e.
    ///   `gcd(ALPHA, p - 1) != 1`
    pub fn new(modulus: BigUint, primitive_element: BigUint) -> Result<Self, RescueError> {
        if modulus < BigUint::from(3u8) || modulus.is_even() {
            return Err(RescueError::ConfigurationError(format!(
                "modulus {} is not an odd prime",
                modulus
            )));
        }
        let primitive_element = FieldElement(primitive_element % &modulus);
        if primitive_element.0.is_zero() || primitive_element.0.is_one() {
            return Err(RescueError::ConfigurationError(format!(
                "{} cannot generate the multiplicative group",
                primitive_element
            )));
        }
        let p_minus_one = &modulus - 1u8;
        let inverse_exponent = mod_inverse(&BigUint::from(ALPHA), &p_minus_one).ok_or_else(|| {
            RescueError::ConfigurationError(format!(
                "x^{} is not a permutation of the field: gcd({}, p - 1) != 1",
                ALPHA, ALPHA
            ))
        })?;

        Ok(Self {
            modulus,
            primitive_element,
            inverse_exponent,
        })
    }

    /// Same as [`Self::new`], with both parameters given as decimal strings.
    pub fn from_decimal_strs(modulus: &str, primitive_element: &str) -> Result<Self, RescueError> {
        Self::new(
            parse_decimal(modulus, "modulus")?,
            parse_decimal(primitive_element, "primitive element")?,
        )
    }

    /// The 128-bit field `p = 1 + 407 * 2^119` with primitive element 2.
    pub fn default_field() -> Self {
        Self {
            modulus: BigUint::from(DEFAULT_MODULUS),
            primitive_element: FieldElement(BigUint::from(DEFAULT_PRIMITIVE_ELEMENT)),
            inverse_exponent: BigUint::from(DEFAULT_INVERSE_EXPONENT),
        }
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The primitive element, reduced mod `p`.
    pub fn primitive_element(&self) -> &FieldElement {
        &self.primitive_element
    }

    /// `ALPHA^{-1} mod (p - 1)`.
    pub fn inverse_exponent(&self) -> &BigUint {
        &self.inverse_exponent
    }

    /// Number of bits needed to represent `p`.
    pub fn modulus_bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Reduce an integer into the field.
    pub fn reduce(&self, value: BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    /// Embed a machine integer into the field.
    pub fn from_u64(&self, value: u64) -> FieldElement {
        self.reduce(BigUint::from(value))
    }

    /// Interpret `bytes` as a little-endian integer and reduce it mod `p`.
    pub fn from_le_bytes_mod_order(&self, bytes: &[u8]) -> FieldElement {
        self.reduce(BigUint::from_bytes_le(bytes))
    }

    /// Parse a non-negative decimal integer and reduce it mod `p`.
    /// Surrounding whitespace is ignored.
    pub fn parse_element(&self, token: &str) -> Result<FieldElement, RescueError> {
        Ok(self.reduce(parse_decimal(token, "field element")?))
    }

    /// `a + b`
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut z = &a.0 + &b.0;
        if z >= self.modulus {
            z -= &self.modulus;
        }
        FieldElement(z)
    }

    /// `a += b`
    pub fn add_assign(&self, a: &mut FieldElement, b: &FieldElement) {
        a.0 += &b.0;
        if a.0 >= self.modulus {
            a.0 -= &self.modulus;
        }
    }

    /// `a - b`
    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        if a.0 >= b.0 {
            FieldElement(&a.0 - &b.0)
        } else {
            FieldElement(&self.modulus - &b.0 + &a.0)
        }
    }

    /// `-a`
    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        self.sub(&self.zero(), a)
    }

    /// `a * b`
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 * &b.0) % &self.modulus)
    }

    /// `a^exp`, with `x^0 = 1` for every `x` including zero.
    pub fn pow(&self, a: &FieldElement, exp: &BigUint) -> FieldElement {
        FieldElement(a.0.modpow(exp, &self.modulus))
    }

    /// `a^exp` for a machine-sized exponent.
    pub fn pow_u64(&self, a: &FieldElement, exp: u64) -> FieldElement {
        self.pow(a, &BigUint::from(exp))
    }

    /// Multiplicative inverse, via the extended Euclidean algorithm.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement, RescueError> {
        if a.is_zero() {
            return Err(RescueError::InvalidOperation(
                "zero has no multiplicative inverse".to_string(),
            ));
        }
        mod_inverse(&a.0, &self.modulus)
            .map(FieldElement)
            .ok_or_else(|| {
                RescueError::InvalidOperation(format!(
                    "{} is not invertible mod {}; is the modulus prime?",
                    a, self.modulus
                ))
            })
    }

    /// `a / b`
    pub fn div(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement, RescueError> {
        Ok(self.mul(a, &self.inverse(b)?))
    }
}

/// `a^{-1} mod m`, if `gcd(a, m) = 1`.
fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let m = BigInt::from(m.clone());
    let egcd = BigInt::from(a.clone()).extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return None;
    }
    egcd.x.mod_floor(&m).to_biguint()
}

// `BigUint::from_str_radix` tolerates `_` separators and a leading `+`; only
// plain ASCII digits are accepted here.
fn parse_decimal(token: &str, what: &str) -> Result<BigUint, RescueError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RescueError::InvalidInput(format!(
            "{} \"{}\" is not a decimal integer",
            what, token
        )));
    }
    BigUint::from_str_radix(token, 10).map_err(|e| {
        RescueError::InvalidInput(format!("{} \"{}\": {}", what, token, e))
    })
}
