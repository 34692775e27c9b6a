//! This module defines vector and matrix structs for rescue hash function.

use crate::field::{FieldElement, PrimeField};
use ark_std::vec::Vec;
use num_bigint::BigUint;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
/// Data type for rescue permutation inputs, outputs and internal data
pub struct RescueVector {
    pub(crate) vec: Vec<FieldElement>,
}

// Public functions
impl RescueVector {
    /// zero vector of length `width`
    pub fn zero(field: &PrimeField, width: usize) -> RescueVector {
        RescueVector {
            vec: ark_std::vec![field.zero(); width],
        }
    }

    /// Return vector of the field elements
    /// WARNING: may expose the internal state.
    pub fn elems(&self) -> Vec<FieldElement> {
        self.vec.clone()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    /// Whether the vector has no element.
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

// Private functions
impl RescueVector {
    // `self = matrix * self + vector`, all three of the same width.
    pub(crate) fn linear(
        &mut self,
        field: &PrimeField,
        matrix: &RescueMatrix,
        vector: &RescueVector,
    ) {
        let mut aux = matrix.mul_vec(field, self);
        aux.add_assign(field, vector);
        *self = aux
    }

    // f(M,x,c) = Mx^e + c
    pub(crate) fn non_linear(
        &mut self,
        field: &PrimeField,
        exp: &BigUint,
        matrix: &RescueMatrix,
        vector: &RescueVector,
    ) {
        self.pow(field, exp);
        self.linear(field, matrix, vector);
    }

    pub(crate) fn pow(&mut self, field: &PrimeField, exp: &BigUint) {
        self.vec.iter_mut().for_each(|elem| {
            *elem = field.pow(elem, exp);
        });
    }

    pub(crate) fn add_assign(&mut self, field: &PrimeField, vector: &RescueVector) {
        debug_assert_eq!(self.len(), vector.len());
        for (a, b) in self.vec.iter_mut().zip(vector.vec.iter()) {
            field.add_assign(a, b);
        }
    }

    // Products are summed unreduced, then reduced once.
    fn dot_product(&self, field: &PrimeField, vector: &RescueVector) -> FieldElement {
        let sum: BigUint = self
            .vec
            .iter()
            .zip(vector.vec.iter())
            .map(|(a, b)| &a.0 * &b.0)
            .sum();
        field.reduce(sum)
    }
}

impl From<Vec<FieldElement>> for RescueVector {
    fn from(vec: Vec<FieldElement>) -> RescueVector {
        RescueVector { vec }
    }
}

impl From<&[FieldElement]> for RescueVector {
    fn from(field_elems: &[FieldElement]) -> RescueVector {
        RescueVector {
            vec: field_elems.to_vec(),
        }
    }
}

impl AsRef<[FieldElement]> for RescueVector {
    fn as_ref(&self) -> &[FieldElement] {
        &self.vec
    }
}

/// A square matrix stored as its rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RescueMatrix {
    matrix: Vec<RescueVector>,
}

impl From<Vec<RescueVector>> for RescueMatrix {
    fn from(rows: Vec<RescueVector>) -> Self {
        Self { matrix: rows }
    }
}

impl RescueMatrix {
    pub(crate) fn mul_vec(&self, field: &PrimeField, vector: &RescueVector) -> RescueVector {
        RescueVector {
            vec: self
                .matrix
                .iter()
                .map(|row| row.dot_product(field, vector))
                .collect(),
        }
    }

    /// Accessing the i-th row of the matrix.
    /// WARNING: may expose the internal state.
    pub fn vec(&self, i: usize) -> RescueVector {
        self.matrix[i].clone()
    }

    /// Check if the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Return the number of rows of the matrix.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }
}
