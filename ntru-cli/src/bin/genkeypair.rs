use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::OsRng;

/// Generates an NTRU key pair and writes `<name>.priv` / `<name>.pub`.
#[derive(Parser, Debug)]
#[command(name = "genkeypair", about = "Generate an NTRU key pair")]
struct Args {
    /// Base name for the key pair files.
    name: String,

    /// Raise the log level by one step (info -> debug -> trace).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut rng = OsRng;
    let (sk, pk) = ntru_kem::keys::keygen(&mut rng);

    let priv_path = format!("{}.priv", args.name);
    let pub_path = format!("{}.pub", args.name);

    std::fs::write(&priv_path, sk.to_bytes())
        .with_context(|| format!("failed to write private key to `{}`", priv_path))?;
    std::fs::write(&pub_path, pk.to_bytes())
        .with_context(|| format!("failed to write public key to `{}`", pub_path))?;

    info!("wrote private key to {}", priv_path);
    info!("wrote public key to {}", pub_path);

    println!("A key pair was generated:");
    println!("  * Private key in file `{}`", priv_path);
    println!("  * Public key in file `{}`", pub_path);

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    );
    builder.init();
}
