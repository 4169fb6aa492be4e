use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use rand::rngs::OsRng;

use rsa::attacks::wiener::WienerAttack;
use rsa::keyfile;
use rsa::rsa::codec;
use rsa::rsa::keygen::{KeyGenConfig, RsaKeyGenerator};
use rsa::rsa::keys::{PrivateKey, PublicKey};

/// Учебная реализация RSA: генерация ключей, блочное шифрование файлов
/// и атака Винера на публичный ключ.
#[derive(Parser)]
#[command(name = "rsa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Генерация ключевой пары; ключи сохраняются в текущей директории
    /// как <timestamp>_public.rsakey и <timestamp>_private.rsakey
    Gen {
        /// Битовая длина каждого из простых p и q
        #[arg(long, default_value_t = 64)]
        bits: u64,
    },
    /// Зашифрование файла
    Encrypt {
        /// Путь к файлу для зашифрования
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Путь к файлу с публичным ключом
        #[arg(long = "public-key")]
        public_key: PathBuf,
        /// Путь к файлу для сохранения результата
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
    /// Расшифрование файла
    Decrypt {
        /// Путь к файлу для расшифрования
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Путь к файлу с публичным ключом
        #[arg(long = "public-key")]
        public_key: PathBuf,
        /// Путь к файлу с приватным ключом
        #[arg(long = "private-key")]
        private_key: PathBuf,
        /// Путь к файлу для сохранения результата
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
    /// Попытка атаки Винера на публичный ключ с расшифрованием файла
    Wiener {
        /// Путь к зашифрованному файлу
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Путь к файлу с публичным ключом
        #[arg(long = "public-key")]
        public_key: PathBuf,
        /// Путь к файлу для сохранения результата
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Gen { bits } => gen_keypair(bits),
        Command::Encrypt {
            file,
            public_key,
            output,
        } => encrypt_file(&file, &public_key, &output),
        Command::Decrypt {
            file,
            public_key,
            private_key,
            output,
        } => decrypt_file(&file, &public_key, &private_key, &output),
        Command::Wiener {
            file,
            public_key,
            output,
        } => wiener_attack(&file, &public_key, &output),
    }
}

fn gen_keypair(bits: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("Выбран режим генерации ключевой пары!");
    log::info!("generating RSA key pair with {}-bit primes", bits);

    let generator = RsaKeyGenerator::new(KeyGenConfig::with_prime_bits(bits));
    let pair = generator.generate_keypair(&mut OsRng)?;

    let (public_name, private_name) = keyfile::timestamped_key_names();
    keyfile::write_public_key(Path::new(&public_name), &pair.public)
        .map_err(|err| format!("{}: {}", public_name, err))?;
    keyfile::write_private_key(Path::new(&private_name), &pair.private)
        .map_err(|err| format!("{}: {}", private_name, err))?;

    println!("Ключевая пара создана и сохранена успешно!");
    println!("Публичный ключ: {}", public_name);
    println!("Приватный ключ: {}", private_name);
    Ok(())
}

fn encrypt_file(
    file: &Path,
    public_key: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Выбран режим зашифрования!");
    let public = read_public(public_key)?;
    let message = fs::read(file).map_err(|err| format!("{}: {}", file.display(), err))?;

    let blocks = codec::encrypt_bytes(&message, &public)?;
    keyfile::write_ciphertext(output, &blocks, &public.n)
        .map_err(|err| format!("{}: {}", output.display(), err))?;

    println!(
        "Файл успешно зашифрован. Результат в файле: {}",
        output.display()
    );
    Ok(())
}

fn decrypt_file(
    file: &Path,
    public_key: &Path,
    private_key: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Выбран режим расшифрования!");
    let public = read_public(public_key)?;
    let private = keyfile::read_private_key(private_key)
        .map_err(|err| format!("{}: {}", private_key.display(), err))?;
    let blocks = keyfile::read_ciphertext(file)
        .map_err(|err| format!("{}: {}", file.display(), err))?;

    let message = codec::decrypt_bytes(&blocks, &private, &public)?;
    fs::write(output, message).map_err(|err| format!("{}: {}", output.display(), err))?;

    println!(
        "Файл успешно расшифрован. Результат в файле: {}",
        output.display()
    );
    Ok(())
}

fn wiener_attack(
    file: &Path,
    public_key: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Выбран режим попытки проведения атаки Винера!");
    let public = read_public(public_key)?;
    let blocks = keyfile::read_ciphertext(file)
        .map_err(|err| format!("{}: {}", file.display(), err))?;

    let outcome = WienerAttack::attack(&public.n, &public.e);
    print_trace(&outcome.quotients);

    match outcome.d {
        Some(d) => {
            println!("Атака завершилась успешно. Приватная экспонента d = {}", d);
            let private = PrivateKey::new(d)?;
            let message = codec::decrypt_bytes(&blocks, &private, &public)?;
            fs::write(output, message).map_err(|err| format!("{}: {}", output.display(), err))?;
            println!(
                "Файл успешно расшифрован. Результат в файле: {}",
                output.display()
            );
        }
        None => {
            println!("Атака завершилась неудачно. Приватный ключ не найден.");
        }
    }
    Ok(())
}

fn read_public(path: &Path) -> Result<PublicKey, Box<dyn std::error::Error>> {
    Ok(keyfile::read_public_key(path).map_err(|err| format!("{}: {}", path.display(), err))?)
}

fn print_trace(quotients: &[BigUint]) {
    let rendered: Vec<String> = quotients.iter().map(|q| q.to_string()).collect();
    println!("Частные непрерывной дроби e/n: [{}]", rendered.join(" "));
}
