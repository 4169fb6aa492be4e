use num_bigint::{BigUint, ToBigInt};
use num_traits::One;
use rand::RngCore;

use crate::error::RsaError;
use crate::number_theory::extended_gcd;
use crate::primality::generate_prime;
use crate::rsa::keys::{PrivateKey, PublicKey};

/// Параметры генерации ключевой пары.
pub struct KeyGenConfig {
    /// Битовая длина каждого из простых p и q.
    pub prime_bits: u64,
    /// Число раундов теста Ферма на кандидата.
    pub primality_rounds: u32,
    /// Минимальная битовая длина |p - q|: защита от факторизации
    /// Ферма по близким простым.
    pub min_prime_diff_bits: u64,
    /// Потолок попыток каждого внутреннего цикла поиска.
    pub max_attempts: u32,
}

impl KeyGenConfig {
    pub fn with_prime_bits(prime_bits: u64) -> Self {
        Self {
            prime_bits,
            primality_rounds: 1024,
            min_prime_diff_bits: prime_bits / 4 + 1,
            max_attempts: 10_000,
        }
    }
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self::with_prime_bits(64)
    }
}

/// Результат генерации: ключевая пара плюс скрытые множители модуля,
/// доступные проверкам целостности.
#[derive(Debug)]
pub struct GeneratedKeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
    p: BigUint,
    q: BigUint,
}

impl GeneratedKeyPair {
    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

/// Сервис генерации ключей RSA.
pub struct RsaKeyGenerator {
    config: KeyGenConfig,
}

impl RsaKeyGenerator {
    pub fn new(config: KeyGenConfig) -> Self {
        Self { config }
    }

    /// Генерация пары ключей: равные по длине p и q с защитой от близких
    /// простых, случайная экспонента e и d = e^(-1) mod φ(n).
    pub fn generate_keypair(
        &self,
        rng: &mut impl RngCore,
    ) -> Result<GeneratedKeyPair, RsaError> {
        let cfg = &self.config;
        let one = BigUint::one();

        for _ in 0..cfg.max_attempts {
            let p = generate_prime(cfg.prime_bits, cfg.primality_rounds, cfg.max_attempts, rng)?;
            let q = generate_prime(cfg.prime_bits, cfg.primality_rounds, cfg.max_attempts, rng)?;

            let diff = if p > q { &p - &q } else { &q - &p };
            if diff.bits() < cfg.min_prime_diff_bits {
                log::debug!("prime pair rejected: |p - q| has {} bit(s)", diff.bits());
                continue;
            }

            let n = &p * &q;
            let phi = (&p - &one) * (&q - &one);
            let (e, d) = self.derive_exponents(&phi, rng)?;

            log::info!("RSA key pair generated: n has {} bits", n.bits());
            return Ok(GeneratedKeyPair {
                public: PublicKey::new(e, n),
                private: PrivateKey::new(d)?,
                p,
                q,
            });
        }

        Err(RsaError::SearchExhausted {
            what: "prime pair with sufficient difference",
            attempts: cfg.max_attempts,
        })
    }

    /// Подбор открытой экспоненты: 128-битный буфер из источника
    /// случайности приводится по модулю φ(n), пока не выполнится
    /// 1 < e и gcd(φ(n), e) = 1; d — коэффициент Безу при e,
    /// нормированный в [0, φ(n)).
    fn derive_exponents(
        &self,
        phi: &BigUint,
        rng: &mut impl RngCore,
    ) -> Result<(BigUint, BigUint), RsaError> {
        let one = BigUint::one();
        let phi_int = phi.to_bigint().unwrap();

        for _ in 0..self.config.max_attempts {
            let mut buf = [0u8; 16];
            rng.try_fill_bytes(&mut buf)?;
            let e = BigUint::from_bytes_be(&buf) % phi;
            if e <= one {
                continue;
            }

            let e_int = e.to_bigint().unwrap();
            let (g, _, _) = extended_gcd(&phi_int, &e_int);
            if !g.is_one() {
                log::debug!("public exponent candidate rejected: not coprime to phi(n)");
                continue;
            }

            let (_, x, _) = extended_gcd(&e_int, &phi_int);
            let d = ((x % &phi_int) + &phi_int) % &phi_int;
            return Ok((e, d.to_biguint().unwrap()));
        }

        Err(RsaError::SearchExhausted {
            what: "public exponent coprime to phi(n)",
            attempts: self.config.max_attempts,
        })
    }
}
