//! RSA «с нуля»: собственная генерация простых, модульная арифметика,
//! ключевые пары, блочное шифрование и атака Винера на малые приватные
//! экспоненты.

pub mod attacks;
pub mod error;
pub mod keyfile;
pub mod number_theory;
pub mod primality;
pub mod rsa;

pub use error::RsaError;
