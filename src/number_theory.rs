use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::mem;

/// Наибольший общий делитель, классический цикл Евклида.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = mem::replace(&mut b, r);
    }
    a
}

/// Коэффициенты Безу: возвращает (g, x, y), где ax + by = g = gcd(a, b).
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Возведение в степень по модулю: base^exponent mod modulus.
/// Бинарный метод, биты экспоненты обходятся от старшего к младшему.
/// Модуль 1 (и 0) даёт 0, нулевая экспонента — 1.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() || modulus.is_one() {
        return BigUint::zero();
    }
    if exponent.is_zero() {
        return BigUint::one();
    }

    let base = base % modulus;
    let mut result = BigUint::one();
    for idx in (0..exponent.bits()).rev() {
        result = (&result * &result) % modulus;
        if exponent.bit(idx) {
            result = (result * &base) % modulus;
        }
    }
    result
}
