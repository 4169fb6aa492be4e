use num_bigint::{BigUint, RandBigInt};
use rand::RngCore;

use crate::error::RsaError;
use crate::primality::fermat::is_probably_prime;

/// Генерирует вероятно простое число ровно `bits` бит: у каждого кандидата
/// принудительно выставлены старший бит (точная длина) и младший (нечётность).
/// Составные кандидаты перевыбираются, не более `max_attempts` раз.
pub fn generate_prime(
    bits: u64,
    rounds: u32,
    max_attempts: u32,
    rng: &mut impl RngCore,
) -> Result<BigUint, RsaError> {
    if bits < 2 {
        return Err(RsaError::InvalidParameters(
            "prime bit-length must be at least 2",
        ));
    }

    for attempt in 1..=max_attempts {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if is_probably_prime(&candidate, rounds, rng) {
            log::debug!("{}-bit prime found after {} candidate(s)", bits, attempt);
            return Ok(candidate);
        }
    }

    Err(RsaError::SearchExhausted {
        what: "prime candidate",
        attempts: max_attempts,
    })
}
