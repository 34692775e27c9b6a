// Copyright (c) 2022 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! A rescue CRHF implementation: one-shot sponge hashing of a whole message.

use crate::{errors::RescueError, field::FieldElement, permutation::Permutation, RescueVector};
use ark_std::{format, vec::Vec};
use jf_utils::{pad_with_one_then_zeros, pad_with_zeros};

/// One-shot sponge hashing over a [`Permutation`].
#[derive(Debug, Clone)]
pub struct RescueCRHF;

impl RescueCRHF {
    /// Sponge hashing based on the rescue permutation. It allows unrestricted
    /// variable length input and returns a vector of `num_outputs` elements.
    ///
    /// we use ["bit padding"-style][padding] where "1" is always appended, then
    /// as many "0" as required are added for the overall length to be a
    /// multiple of the rate. For `num_outputs <= rate` this is the digest
    /// [`crate::RescueHasher`] produces for the same message.
    ///
    /// [padding]: https://en.wikipedia.org/wiki/Padding_(cryptography)#Bit_padding
    pub fn sponge_with_bit_padding(
        perm: &Permutation,
        input: &[FieldElement],
        num_outputs: usize,
    ) -> Vec<FieldElement> {
        let field = perm.field();
        let mut padded = reduced(perm, input);
        pad_with_one_then_zeros(&mut padded, perm.config().rate(), field.one(), field.zero());
        absorb_and_squeeze(perm, &padded, num_outputs)
    }

    /// Similar to [`RescueCRHF::sponge_with_bit_padding`] except we use ["zero
    /// padding"][padding] where as many "0" as required are added for the
    /// overall length to be a multiple of the rate.
    ///
    /// [padding]: https://en.wikipedia.org/wiki/Padding_(cryptography)#Zero_padding
    pub fn sponge_with_zero_padding(
        perm: &Permutation,
        input: &[FieldElement],
        num_outputs: usize,
    ) -> Vec<FieldElement> {
        let mut padded = reduced(perm, input);
        pad_with_zeros(&mut padded, perm.config().rate(), perm.field().zero());
        absorb_and_squeeze(perm, &padded, num_outputs)
    }

    /// Sponge hashing without padding. It allows inputs with length that is a
    /// multiple of the rate and returns a vector of `num_outputs` elements.
    pub fn sponge_no_padding(
        perm: &Permutation,
        input: &[FieldElement],
        num_outputs: usize,
    ) -> Result<Vec<FieldElement>, RescueError> {
        let rate = perm.config().rate();
        if input.len() % rate != 0 {
            return Err(RescueError::InvalidInput(format!(
                "Rescue sponge Error : input length {} is not a multiple of the rate {}.",
                input.len(),
                rate
            )));
        }
        Ok(absorb_and_squeeze(perm, &reduced(perm, input), num_outputs))
    }
}

fn reduced(perm: &Permutation, input: &[FieldElement]) -> Vec<FieldElement> {
    input
        .iter()
        .map(|elem| perm.field().reduce(elem.as_biguint().clone()))
        .collect()
}

// `input` is reduced and its length a multiple of the rate.
fn absorb_and_squeeze(
    perm: &Permutation,
    input: &[FieldElement],
    num_outputs: usize,
) -> Vec<FieldElement> {
    let field = perm.field();
    let rate = perm.config().rate();

    // ABSORB PHASE
    let mut state = RescueVector::zero(field, perm.config().state_width);
    for chunk in input.chunks_exact(rate) {
        for (s, x) in state.vec.iter_mut().zip(chunk.iter()) {
            field.add_assign(s, x);
        }
        perm.permute(&mut state);
    }

    // SQUEEZE PHASE
    let mut result = Vec::with_capacity(num_outputs);
    let mut remaining = num_outputs;
    loop {
        let extract = remaining.min(rate);
        result.extend_from_slice(&state.vec[0..extract]);
        remaining -= extract;
        if remaining == 0 {
            break;
        }
        perm.permute(&mut state);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RescueHasher;
    use ark_std::{sync::Arc, vec};

    #[test]
    fn agrees_with_incremental_hasher() {
        let perm = Arc::new(Permutation::default_params().unwrap());
        let field = perm.field().clone();
        for len in [0u64, 1, 5, 8, 13] {
            let input: Vec<_> = (0..len).map(|i| field.from_u64(i * 31 + 1)).collect();
            let mut hasher = RescueHasher::from_permutation(perm.clone());
            hasher.absorb_elems(&input).unwrap();
            assert_eq!(
                RescueCRHF::sponge_with_bit_padding(&perm, &input, 4),
                hasher.finish_elements().unwrap()
            );
        }
    }

    #[test]
    fn long_outputs_extend_short_ones() {
        let perm = Permutation::default_params().unwrap();
        let input = vec![perm.field().from_u64(1)];
        let short = RescueCRHF::sponge_with_bit_padding(&perm, &input, 8);
        let long = RescueCRHF::sponge_with_bit_padding(&perm, &input, 20);
        assert_eq!(long.len(), 20);
        assert_eq!(&long[..8], &short[..]);
        assert_eq!(
            RescueCRHF::sponge_with_bit_padding(&perm, &input, 0),
            Vec::<FieldElement>::new()
        );
    }

    #[test]
    fn padding_modes() {
        let perm = Permutation::default_params().unwrap();
        let field = perm.field();
        let input = vec![field.from_u64(3); 3];
        let mut zero_padded = input.clone();
        zero_padded.resize(8, field.zero());

        assert_eq!(
            RescueCRHF::sponge_with_zero_padding(&perm, &input, 4),
            RescueCRHF::sponge_no_padding(&perm, &zero_padded, 4).unwrap()
        );
        assert_ne!(
            RescueCRHF::sponge_with_zero_padding(&perm, &input, 4),
            RescueCRHF::sponge_with_bit_padding(&perm, &input, 4)
        );
        assert!(matches!(
            RescueCRHF::sponge_no_padding(&perm, &input, 4),
            Err(RescueError::InvalidInput(_))
        ));
    }
}
