use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::debug;
use rand::rngs::OsRng;

/// Encrypts or decrypts a file using an NTRU key pair.
#[derive(Parser, Debug)]
#[command(name = "ntruencrypt", about = "Encrypt/decrypt with NTRU")]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
struct Args {
    /// Encryption mode.
    #[arg(short = 'e', long = "encrypt")]
    encrypt: bool,

    /// Decryption mode.
    #[arg(short = 'd', long = "decrypt")]
    decrypt: bool,

    /// Public or private key file, depending on the mode.
    #[arg(short = 'k', long = "key", value_name = "KEYFILE")]
    key: String,

    /// File to encrypt/decrypt.
    #[arg(short = 'i', long = "input", value_name = "IN")]
    fname_in: String,

    /// Encrypted/decrypted output file.
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    fname_out: String,

    /// Raise the log level by one step (info -> debug -> trace).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let key = std::fs::read(&args.key)
        .with_context(|| format!("failed to read key file `{}`", args.key))?;
    let data = std::fs::read(&args.fname_in)
        .with_context(|| format!("failed to read input file `{}`", args.fname_in))?;
    debug!("read {} key bytes, {} input bytes", key.len(), data.len());

    let mut rng = OsRng;

    if args.encrypt {
        let out = ntru_kem::file_crypto::encrypt_payload(&key, &data, &mut rng)
            .with_context(|| format!("failed to encrypt `{}`", args.fname_in))?;
        std::fs::write(&args.fname_out, &out)
            .with_context(|| format!("failed to write `{}`", args.fname_out))?;
        println!(
            "File `{}` has been encrypted using the following public key:",
            args.fname_in
        );
        println!("Public key: {}", hex::encode(&key));
    } else {
        let out = ntru_kem::file_crypto::decrypt_payload(&key, &data)
            .with_context(|| format!("failed to decrypt `{}`", args.fname_in))?;
        std::fs::write(&args.fname_out, &out)
            .with_context(|| format!("failed to write `{}`", args.fname_out))?;
        println!("File `{}` has been successfully decrypted.", args.fname_in);
        println!("Decrypted file: `{}`", args.fname_out);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    );
    builder.init();
}
