use std::collections::HashSet;

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::RngCore;

use crate::number_theory::mod_pow;

/// Вероятностный тест Ферма: для случайных оснований a из [2, n-1]
/// проверяется a^(n-1) ≡ 1 (mod n), единственный провал отклоняет кандидата.
///
/// Уже испытанное чётное основание перевыбирается, не расходуя раунд;
/// нечётные повторы тестируются заново и засчитываются.
pub fn is_probably_prime(n: &BigUint, rounds: u32, rng: &mut impl RngCore) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u8);

    if *n <= BigUint::from(3u8) {
        return *n == two || *n == BigUint::from(3u8);
    }

    let pow = n - &one;
    let mut seen: HashSet<BigUint> = HashSet::new();
    let mut round = 0u32;
    while round < rounds {
        let base = rng.gen_biguint_range(&two, n);
        if seen.contains(&base) && base.is_even() {
            continue;
        }
        if mod_pow(&base, &pow, n) != one {
            return false;
        }
        seen.insert(base);
        round += 1;
    }
    true
}
