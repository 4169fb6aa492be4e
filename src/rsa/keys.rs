use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::RsaError;

/// Публичный ключ RSA: экспонента e и модуль n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

impl PublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }
}

/// Приватный ключ RSA. Хранит только экспоненту d: модуль n всегда
/// передаётся вместе с публичным ключом в операцию расшифрования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    d: BigUint,
}

impl PrivateKey {
    pub fn new(d: BigUint) -> Result<Self, RsaError> {
        if d.is_zero() {
            return Err(RsaError::ZeroPrivateExponent);
        }
        Ok(Self { d })
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }
}
