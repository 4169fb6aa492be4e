use std::fs;
use std::path::Path;

use chrono::Local;
use num_bigint::BigUint;

use crate::error::RsaError;
use crate::rsa::codec::cipher_block_size;
use crate::rsa::keys::{PrivateKey, PublicKey};

/// Публичный ключ: два десятичных числа, e на первой строке, n на второй.
pub fn parse_public_key(contents: &str) -> Result<PublicKey, RsaError> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != 2 {
        return Err(RsaError::MalformedKeyFile {
            reason: format!("expected 2 lines, found {}", lines.len()),
        });
    }

    let e = parse_decimal(lines[0], "e on line 1")?;
    let n = parse_decimal(lines[1], "n on line 2")?;
    Ok(PublicKey::new(e, n))
}

pub fn format_public_key(key: &PublicKey) -> String {
    format!("{}\n{}", key.e, key.n)
}

/// Приватный ключ: одно десятичное число d, ноль недопустим.
pub fn parse_private_key(contents: &str) -> Result<PrivateKey, RsaError> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != 1 {
        return Err(RsaError::MalformedKeyFile {
            reason: format!("expected 1 line, found {}", lines.len()),
        });
    }

    let d = parse_decimal(lines[0], "d on line 1")?;
    PrivateKey::new(d)
}

pub fn format_private_key(key: &PrivateKey) -> String {
    key.d().to_string()
}

fn parse_decimal(line: &str, what: &str) -> Result<BigUint, RsaError> {
    BigUint::parse_bytes(line.as_bytes(), 10).ok_or_else(|| RsaError::MalformedKeyFile {
        reason: format!("{} must be a decimal integer", what),
    })
}

/// Шифртекст: по одному hex-блоку на строке; каждая строка — big-endian
/// представление блока фиксированной ширины, равной байтовой длине n.
pub fn format_ciphertext(blocks: &[BigUint], n: &BigUint) -> String {
    let width = cipher_block_size(n);
    let mut lines = Vec::with_capacity(blocks.len());
    for block in blocks {
        let bytes = block.to_bytes_be();
        let mut fixed = vec![0u8; width.saturating_sub(bytes.len())];
        fixed.extend_from_slice(&bytes);
        lines.push(hex::encode(fixed));
    }
    lines.join("\n")
}

pub fn parse_ciphertext(contents: &str) -> Result<Vec<BigUint>, RsaError> {
    let mut blocks = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.is_empty() {
            return Err(RsaError::MalformedCiphertext {
                line: idx + 1,
                reason: "empty line".to_string(),
            });
        }
        let bytes = hex::decode(line).map_err(|err| RsaError::MalformedCiphertext {
            line: idx + 1,
            reason: err.to_string(),
        })?;
        blocks.push(BigUint::from_bytes_be(&bytes));
    }
    Ok(blocks)
}

pub fn read_public_key(path: &Path) -> Result<PublicKey, RsaError> {
    parse_public_key(&fs::read_to_string(path)?)
}

pub fn write_public_key(path: &Path, key: &PublicKey) -> Result<(), RsaError> {
    Ok(fs::write(path, format_public_key(key))?)
}

pub fn read_private_key(path: &Path) -> Result<PrivateKey, RsaError> {
    parse_private_key(&fs::read_to_string(path)?)
}

pub fn write_private_key(path: &Path, key: &PrivateKey) -> Result<(), RsaError> {
    Ok(fs::write(path, format_private_key(key))?)
}

pub fn read_ciphertext(path: &Path) -> Result<Vec<BigUint>, RsaError> {
    parse_ciphertext(&fs::read_to_string(path)?)
}

pub fn write_ciphertext(path: &Path, blocks: &[BigUint], n: &BigUint) -> Result<(), RsaError> {
    Ok(fs::write(path, format_ciphertext(blocks, n))?)
}

/// Имена файлов ключевой пары: <метка времени>_public.rsakey и
/// <метка времени>_private.rsakey в текущей директории.
pub fn timestamped_key_names() -> (String, String) {
    let ts = Local::now().format("%Y%m%dT%H%M%S");
    (
        format!("{}_public.rsakey", ts),
        format!("{}_private.rsakey", ts),
    )
}
