use thiserror::Error;

/// Ошибки операций криптосистемы.
#[derive(Debug, Error)]
pub enum RsaError {
    /// Файл ключа имеет неверную структуру или нечисловые поля.
    #[error("malformed key file: {reason}")]
    MalformedKeyFile { reason: String },

    #[error("malformed ciphertext at line {line}: {reason}")]
    MalformedCiphertext { line: usize, reason: String },

    /// Нулевая приватная экспонента не образует ключ.
    #[error("private exponent must not be zero")]
    ZeroPrivateExponent,

    /// Источник случайности недоступен; операция прерывается.
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(#[from] rand::Error),

    /// Некорректное дополнение при расшифровании: неверный ключ
    /// либо повреждённый шифртекст.
    #[error("padding corruption: pad value {pad} for a buffer of {len} byte(s)")]
    PaddingCorruption { pad: u8, len: usize },

    #[error("decrypted block {index} exceeds the plaintext block size")]
    BlockOverflow { index: usize },

    /// Модуль короче двух байт не вмещает ни одного блока открытого текста.
    #[error("modulus of {bytes} byte(s) is too small for block encryption")]
    ModulusTooSmall { bytes: usize },

    /// Ограниченный цикл поиска не дал результата за отведённые попытки.
    #[error("{what}: search exhausted after {attempts} attempts")]
    SearchExhausted { what: &'static str, attempts: u32 },

    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
