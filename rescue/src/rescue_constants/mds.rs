//! MDS matrix from a systematic generator matrix of a Reed-Solomon code
//! (Algorithm 4).

use crate::{
    errors::RescueError,
    field::{FieldElement, PrimeField},
    structs::{RescueMatrix, RescueVector},
};
use ark_std::{collections::BTreeSet, end_timer, format, start_timer, vec::Vec};
use num_bigint::BigUint;

/// Build the `m x m` MDS matrix for `generator`.
///
/// 1. `V[i][j] = g^(i * j)` for `0 <= i < m`, `0 <= j < 2m`
/// 2. reduce `V` to reduced row echelon form `[I | A]`
/// 3. the MDS matrix is `A^T`
///
/// Every square submatrix of the result is non-singular as long as
/// `g^0, ..., g^(2m - 1)` are pairwise distinct, which is checked first.
pub(crate) fn mds_matrix(field: &PrimeField, m: usize) -> Result<RescueMatrix, RescueError> {
    // the powers of g are nonzero, so at most p - 1 of them are distinct
    let width = m
        .checked_mul(2)
        .filter(|w| BigUint::from(*w) < *field.modulus())
        .ok_or_else(|| {
            RescueError::ConfigurationError(format!(
                "state width {} needs 2m distinct powers, more than mod {} has",
                m,
                field.modulus()
            ))
        })?;

    let timer = start_timer!(|| format!("Rescue-XLIX MDS matrix, m = {}", m));
    let g = field.primitive_element();

    let mut nodes = Vec::with_capacity(width);
    let mut power = field.one();
    for _ in 0..width {
        nodes.push(power.clone());
        power = field.mul(&power, g);
    }
    if nodes.iter().collect::<BTreeSet<_>>().len() != nodes.len() {
        return Err(RescueError::ConfigurationError(format!(
            "{} has fewer than {} distinct powers mod {}, state width {} is unsupported",
            g,
            width,
            field.modulus(),
            m
        )));
    }

    // row i holds the powers of g^i
    let mut v: Vec<Vec<FieldElement>> = nodes[..m]
        .iter()
        .map(|node| {
            let mut row = Vec::with_capacity(width);
            let mut acc = field.one();
            for _ in 0..width {
                row.push(acc.clone());
                acc = field.mul(&acc, node);
            }
            row
        })
        .collect();

    reduced_echelon_form(field, &mut v, m)?;

    let mds = (0..m)
        .map(|r| RescueVector::from((0..m).map(|c| v[c][m + r].clone()).collect::<Vec<_>>()))
        .collect::<Vec<_>>();

    end_timer!(timer);
    Ok(RescueMatrix::from(mds))
}

/// Gauss-Jordan elimination on the first `pivots` columns of `rows`.
fn reduced_echelon_form(
    field: &PrimeField,
    rows: &mut [Vec<FieldElement>],
    pivots: usize,
) -> Result<(), RescueError> {
    for col in 0..pivots {
        let pivot_row = (col..rows.len())
            .find(|&r| !rows[r][col].is_zero())
            .ok_or_else(|| {
                RescueError::ConfigurationError(format!(
                    "Vandermonde matrix is singular at column {}",
                    col
                ))
            })?;
        rows.swap(col, pivot_row);

        let pivot_inv = field.inverse(&rows[col][col])?;
        for x in rows[col].iter_mut() {
            *x = field.mul(x, &pivot_inv);
        }

        let pivot = rows[col].clone();
        for (r, row) in rows.iter_mut().enumerate() {
            if r == col || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (x, p) in row.iter_mut().zip(pivot.iter()) {
                *x = field.sub(x, &field.mul(&factor, p));
            }
        }
    }
    Ok(())
}
