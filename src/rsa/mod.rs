pub mod codec;
pub mod keygen;
pub mod keys;

pub use keygen::{GeneratedKeyPair, KeyGenConfig, RsaKeyGenerator};
pub use keys::{PrivateKey, PublicKey};
