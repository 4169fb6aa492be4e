use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rsa::error::RsaError;
use rsa::keyfile::*;
use rsa::rsa::codec::{decrypt_bytes, encrypt_bytes};
use rsa::rsa::{KeyGenConfig, PrivateKey, PublicKey, RsaKeyGenerator};

#[test]
fn test_public_key_text_roundtrip() {
    let key = PublicKey::new(BigUint::from(65537u32), BigUint::from(4294049777u64));
    let text = format_public_key(&key);
    assert_eq!(text, "65537\n4294049777");
    assert_eq!(parse_public_key(&text).unwrap(), key);
}

#[test]
fn test_public_key_tolerates_trailing_newline() {
    let key = parse_public_key("17\n713\n").unwrap();
    assert_eq!(key.e, BigUint::from(17u32));
    assert_eq!(key.n, BigUint::from(713u32));
}

#[test]
fn test_public_key_wrong_line_count() {
    for contents in ["17", "17\n713\n999", ""] {
        let err = parse_public_key(contents).unwrap_err();
        assert!(
            matches!(err, RsaError::MalformedKeyFile { .. }),
            "{:?} обязано быть отвергнуто",
            contents
        );
    }
}

#[test]
fn test_public_key_rejects_non_decimal() {
    for contents in ["not-a-number\n713", "0x11\n713", "17\n-713"] {
        assert!(parse_public_key(contents).is_err());
    }
}

#[test]
fn test_private_key_text_roundtrip() {
    let key = PrivateKey::new(BigUint::from(2020667633u64)).unwrap();
    let text = format_private_key(&key);
    assert_eq!(text, "2020667633");
    assert_eq!(parse_private_key(&text).unwrap().d(), key.d());
}

#[test]
fn test_private_key_rejects_zero_exponent() {
    let err = parse_private_key("0").unwrap_err();
    assert!(matches!(err, RsaError::ZeroPrivateExponent));
}

#[test]
fn test_private_key_wrong_line_count() {
    for contents in ["283\n283", ""] {
        assert!(parse_private_key(contents).is_err());
    }
}

#[test]
fn test_ciphertext_lines_have_fixed_width() {
    let n = BigUint::from(4294049777u64);
    let blocks = [BigUint::from(1u32), BigUint::from(0xA1B2C3u32)];
    let text = format_ciphertext(&blocks, &n);
    assert_eq!(text, "00000001\n00a1b2c3");
    assert_eq!(parse_ciphertext(&text).unwrap(), blocks);
}

#[test]
fn test_ciphertext_rejects_bad_hex() {
    for contents in ["00000001\nzz", "123"] {
        assert!(matches!(
            parse_ciphertext(contents).unwrap_err(),
            RsaError::MalformedCiphertext { .. }
        ));
    }
    // номер строки в ошибке считается с единицы
    let err = parse_ciphertext("00000001\nzz").unwrap_err();
    assert!(matches!(err, RsaError::MalformedCiphertext { line: 2, .. }));
}

#[test]
fn test_ciphertext_rejects_empty_line() {
    let err = parse_ciphertext("00000001\n\n00000002").unwrap_err();
    assert!(matches!(err, RsaError::MalformedCiphertext { line: 2, .. }));
}

#[test]
fn test_empty_ciphertext_parses_to_no_blocks() {
    assert_eq!(parse_ciphertext("").unwrap(), vec![]);
}

#[test]
fn test_key_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let public = PublicKey::new(BigUint::from(17u32), BigUint::from(4294049777u64));
    let private = PrivateKey::new(BigUint::from(2020667633u64)).unwrap();

    let public_path = dir.path().join("pair_public.rsakey");
    let private_path = dir.path().join("pair_private.rsakey");
    write_public_key(&public_path, &public).unwrap();
    write_private_key(&private_path, &private).unwrap();

    assert_eq!(read_public_key(&public_path).unwrap(), public);
    assert_eq!(read_private_key(&private_path).unwrap().d(), private.d());
}

#[test]
fn test_missing_key_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_public_key(&dir.path().join("missing.rsakey")).unwrap_err();
    assert!(matches!(err, RsaError::Io(_)));
}

#[test]
fn test_timestamped_names_follow_pattern() {
    let (public_name, private_name) = timestamped_key_names();
    assert!(public_name.ends_with("_public.rsakey"));
    assert!(private_name.ends_with("_private.rsakey"));

    let stamp = public_name.trim_end_matches("_public.rsakey");
    assert_eq!(stamp, private_name.trim_end_matches("_private.rsakey"));
    assert_eq!(stamp.len(), 15);
    assert_eq!(stamp.as_bytes()[8], b'T');
    assert!(
        stamp
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit())
    );
}

#[test]
fn test_full_cycle_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let mut config = KeyGenConfig::with_prime_bits(32);
    config.primality_rounds = 64;
    let pair = RsaKeyGenerator::new(config)
        .generate_keypair(&mut rng)
        .unwrap();

    let public_path = dir.path().join("cycle_public.rsakey");
    let private_path = dir.path().join("cycle_private.rsakey");
    write_public_key(&public_path, &pair.public).unwrap();
    write_private_key(&private_path, &pair.private).unwrap();

    let message = b"roundtrip through key files";
    let public = read_public_key(&public_path).unwrap();
    let blocks = encrypt_bytes(message, &public).unwrap();

    let cipher_path = dir.path().join("message.enc");
    write_ciphertext(&cipher_path, &blocks, &public.n).unwrap();

    let restored = read_ciphertext(&cipher_path).unwrap();
    let private = read_private_key(&private_path).unwrap();
    assert_eq!(decrypt_bytes(&restored, &private, &public).unwrap(), message);
}
