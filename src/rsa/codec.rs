use num_bigint::BigUint;

use crate::error::RsaError;
use crate::number_theory::mod_pow;
use crate::rsa::keys::{PrivateKey, PublicKey};

/// Размер блока открытого текста: на байт короче длины n, чтобы значение
/// любого блока было строго меньше модуля. Ограничен 255 байтами — счётчик
/// дополнения обязан помещаться в один байт.
pub fn plaintext_block_size(n: &BigUint) -> Result<usize, RsaError> {
    let n_len = n.to_bytes_be().len();
    if n_len < 2 {
        return Err(RsaError::ModulusTooSmall { bytes: n_len });
    }
    Ok((n_len - 1).min(255))
}

/// Ширина сериализованного блока шифртекста: полная байтовая длина n.
pub fn cipher_block_size(n: &BigUint) -> usize {
    n.to_bytes_be().len()
}

/// PKCS#7: дополняет данные до кратности block_size; выровненный вход
/// (пустой включительно) получает целый блок дополнения.
pub fn pad_pkcs7(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.extend(std::iter::repeat(pad as u8).take(pad));
    padded
}

/// Снимает дополнение: последний байт — счётчик. Нулевой счётчик, счётчик
/// больше блока или буфера, несовпадающие хвостовые байты — повреждение.
pub fn strip_pkcs7(data: &[u8], block_size: usize) -> Result<Vec<u8>, RsaError> {
    let last = match data.last() {
        Some(&byte) => byte,
        None => return Err(RsaError::PaddingCorruption { pad: 0, len: 0 }),
    };

    let pad = last as usize;
    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(RsaError::PaddingCorruption {
            pad: last,
            len: data.len(),
        });
    }
    if !data[data.len() - pad..].iter().all(|&byte| byte == last) {
        return Err(RsaError::PaddingCorruption {
            pad: last,
            len: data.len(),
        });
    }

    Ok(data[..data.len() - pad].to_vec())
}

/// Шифрует байтовую последовательность: дополнение, разбиение на блоки,
/// каждый блок трактуется как big-endian число и возводится в степень e
/// по модулю n. Блоки независимы, порядок значим.
pub fn encrypt_bytes(message: &[u8], public: &PublicKey) -> Result<Vec<BigUint>, RsaError> {
    let block_size = plaintext_block_size(&public.n)?;
    let padded = pad_pkcs7(message, block_size);

    Ok(padded
        .chunks_exact(block_size)
        .map(|chunk| mod_pow(&BigUint::from_bytes_be(chunk), &public.e, &public.n))
        .collect())
}

/// Расшифровывает блоки обратно в байты. Модуль берётся из публичного
/// ключа: приватный ключ содержит только d.
pub fn decrypt_bytes(
    blocks: &[BigUint],
    private: &PrivateKey,
    public: &PublicKey,
) -> Result<Vec<u8>, RsaError> {
    let block_size = plaintext_block_size(&public.n)?;
    let mut buffer = Vec::with_capacity(blocks.len() * block_size);

    for (index, block) in blocks.iter().enumerate() {
        let m = mod_pow(block, private.d(), &public.n);
        let bytes = m.to_bytes_be();
        if bytes.len() > block_size {
            return Err(RsaError::BlockOverflow { index });
        }
        buffer.extend(std::iter::repeat(0u8).take(block_size - bytes.len()));
        buffer.extend_from_slice(&bytes);
    }

    strip_pkcs7(&buffer, block_size)
}
