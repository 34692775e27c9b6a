//! Round constants expanded from SHAKE256.

use crate::{errors::RescueError, field::PrimeField, param::RescueConfig, structs::RescueVector};
use ark_std::{end_timer, format, start_timer, vec, vec::Vec};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Produce `2 * rounds` vectors of `state_width` constants. Vector `2i` is
/// added after the forward half of round `i`, vector `2i + 1` after the
/// inverse half.
///
/// The XOF is seeded with `"Rescue-XLIX(p,m,capacity,security_level)"` in
/// decimal ASCII, and read in chunks of `ceil(bits(p) / 8) + 1` bytes. Each
/// chunk is a little-endian integer reduced mod `p`; the extra byte keeps the
/// reduction bias negligible.
pub(crate) fn round_constants(
    field: &PrimeField,
    config: &RescueConfig,
) -> Result<Vec<RescueVector>, RescueError> {
    let num_vectors = config
        .rounds
        .checked_mul(2)
        .filter(|n| n.checked_mul(config.state_width).is_some())
        .ok_or_else(|| {
            RescueError::ConfigurationError(format!(
                "{} rounds of width {} overflow the round-constant count",
                config.rounds, config.state_width
            ))
        })?;

    let timer = start_timer!(|| format!(
        "Rescue-XLIX round constants for m = {}, N = {}",
        config.state_width, config.rounds
    ));

    let bytes_per_int = (field.modulus_bits() as usize + 7) / 8 + 1;
    let seed = format!(
        "Rescue-XLIX({},{},{},{})",
        field.modulus(),
        config.state_width,
        config.capacity,
        config.security_level
    );

    let mut hasher = Shake256::default();
    hasher.update(seed.as_bytes());
    let mut reader = hasher.finalize_xof();

    let mut chunk = vec![0u8; bytes_per_int];
    let constants: Vec<RescueVector> = (0..num_vectors)
        .map(|_| {
            RescueVector::from(
                (0..config.state_width)
                    .map(|_| {
                        reader.read(&mut chunk);
                        field.from_le_bytes_mod_order(&chunk)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    end_timer!(timer);
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;

    fn values(v: &RescueVector) -> Vec<u64> {
        v.vec
            .iter()
            .map(|e: &FieldElement| e.to_string().parse().unwrap())
            .collect()
    }

    #[test]
    fn small_field_constants() {
        let field = PrimeField::from_decimal_strs("103", "5").unwrap();
        let constants = round_constants(&field, &RescueConfig::new(3, 1, 2, 2)).unwrap();
        assert_eq!(constants.len(), 4);
        let flat: Vec<u64> = constants.iter().flat_map(values).collect();
        assert_eq!(flat, [46, 14, 49, 1, 10, 49, 9, 101, 15, 54, 22, 45]);
    }

    #[test]
    fn default_constants() {
        let field = PrimeField::default_field();
        let constants = round_constants(&field, &RescueConfig::default()).unwrap();
        assert_eq!(constants.len(), 14);
        assert!(constants.iter().all(|v| v.len() == 12));
        assert_eq!(
            constants[0].vec[0].to_string(),
            "133629944410821420808066465105178855523"
        );
        assert_eq!(
            constants[13].vec[11].to_string(),
            "231679242578428006533302114140302836890"
        );
    }

    #[test]
    fn seed_depends_on_capacity_and_security_level() {
        let field = PrimeField::default_field();
        let base = round_constants(&field, &RescueConfig::default()).unwrap();
        let other_capacity = round_constants(&field, &RescueConfig::new(12, 3, 7, 4)).unwrap();
        let mut config = RescueConfig::default();
        config.security_level = 160;
        let other_level = round_constants(&field, &config).unwrap();
        assert_ne!(base, other_capacity);
        assert_ne!(base, other_level);
    }

    #[test]
    fn rejects_overflowing_round_count() {
        let field = PrimeField::default_field();
        for (width, rounds) in [(12, usize::MAX), (12, usize::MAX / 2 + 1), (usize::MAX, 1)] {
            assert!(matches!(
                round_constants(&field, &RescueConfig::new(width, 4, rounds, 4)),
                Err(RescueError::ConfigurationError(_))
            ));
        }
    }
}
