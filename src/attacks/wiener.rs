use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

use crate::number_theory::mod_pow;

/// Подходящая дробь разложения e/n: k — числитель (кандидат множителя
/// φ(n)), d — знаменатель (кандидат приватной экспоненты).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convergent {
    pub k: BigUint,
    pub d: BigUint,
}

/// Итог атаки: найденная экспонента (None при исчерпании) и полная трасса
/// поиска — частные и подходящие дроби разложения e/n.
#[derive(Debug)]
pub struct WienerAttackOutcome {
    pub d: Option<BigUint>,
    pub quotients: Vec<BigUint>,
    pub convergents: Vec<Convergent>,
}

impl WienerAttackOutcome {
    pub fn is_exhausted(&self) -> bool {
        self.d.is_none()
    }
}

/// Частные разложения e/n в непрерывную дробь (цикл Евклида по остаткам).
pub fn continued_fraction(e: &BigUint, n: &BigUint) -> Vec<BigUint> {
    let mut quotients = Vec::new();
    let mut a = e.clone();
    let mut b = n.clone();
    while !b.is_zero() {
        let q = &a / &b;
        let r = &a % &b;
        a = b;
        b = r;
        quotients.push(q);
    }
    quotients
}

/// Подходящие дроби по двухчленной рекурренте:
/// k_i = q_i * k_(i-1) + k_(i-2), d_i аналогично.
pub fn convergents(quotients: &[BigUint]) -> Vec<Convergent> {
    let (mut prev_k, mut k) = (BigUint::zero(), BigUint::one());
    let (mut prev_d, mut d) = (BigUint::one(), BigUint::zero());
    let mut result = Vec::with_capacity(quotients.len());

    for q in quotients {
        let next_k = q * &k + &prev_k;
        let next_d = q * &d + &prev_d;
        prev_k = mem::replace(&mut k, next_k);
        prev_d = mem::replace(&mut d, next_d);

        result.push(Convergent {
            k: k.clone(),
            d: d.clone(),
        });
    }
    result
}

pub struct WienerAttack;

impl WienerAttack {
    /// Атака Винера по (n, e): подходящие дроби e/n перебираются в порядке
    /// возрастания; кандидат, чей числитель k делит e*d - 1, подтверждается
    /// контрольным шифрованием пробного значения 2. Возвращается первый
    /// подтверждённый d; при исчерпании трасса сохраняется целиком.
    pub fn attack(n: &BigUint, e: &BigUint) -> WienerAttackOutcome {
        let quotients = continued_fraction(e, n);
        let convergents = convergents(&quotients);
        log::debug!(
            "continued fraction of e/n: {} partial quotient(s)",
            quotients.len()
        );

        let one = BigUint::one();
        let probe = BigUint::from(2u8);
        let mut found = None;

        for (index, c) in convergents.iter().enumerate() {
            if c.k.is_zero() || c.d.is_zero() {
                continue;
            }

            let ed_minus_one = e * &c.d - &one;
            if !(&ed_minus_one % &c.k).is_zero() {
                continue;
            }

            if mod_pow(&mod_pow(&probe, &c.d, n), e, n) == probe {
                log::info!("wiener attack: convergent #{} confirmed", index);
                found = Some(c.d.clone());
                break;
            }
        }

        if found.is_none() {
            log::info!(
                "wiener attack exhausted all {} convergent(s)",
                convergents.len()
            );
        }

        WienerAttackOutcome {
            d: found,
            quotients,
            convergents,
        }
    }
}
