use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use cosmos_keyaddress::{
    address::{Address, AddressSet},
    keytype::KeyType,
    util::encode_02x,
    validate
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cosmos-keyaddress", version, about = "Derive Cosmos style addresses from a mnemonic, private key or public key")]
struct Cli {
    /// Bech32 prefix of the chain (e.g. sei, cosmos, osmo)
    #[arg(long, global = true, env = "KEYADDR_PREFIX", default_value = "sei")]
    prefix: String,

    /// Key type of the chain: canonical, eth_secp256k1 or secp256k1
    #[arg(long, global = true, env = "KEYADDR_KEY_TYPE", default_value = "canonical")]
    key_type: KeyType,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, env = "KEYADDR_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command
}

#[derive(Subcommand)]
enum Command {
    /// Derive addresses from a BIP39 mnemonic
    Mnemonic {
        /// Read the mnemonic from a file instead of prompting
        #[arg(long, value_name = "PATH")]
        mnemonic_file: Option<PathBuf>,
        /// BIP44 derivation path
        #[arg(long, env = "KEYADDR_PATH", default_value = "m/44'/118'/0'/0/0")]
        path: String
    },
    /// Derive addresses from a hex private key
    PrivateKey {
        /// Hex private key (prompted for without echo when omitted)
        #[arg(long)]
        key: Option<String>
    },
    /// Derive the native address of a hex or base64 public key
    PublicKey {
        #[arg(long)]
        key: String
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let prefix = validate::prefix(&cli.prefix)?;
    debug!(prefix, key_type = %cli.key_type, "starting");

    match cli.cmd {
        Command::Mnemonic { mnemonic_file, path } => {
            let phrase = get_mnemonic(mnemonic_file.as_deref())?;
            validate::derivation_path(&path)?;
            let set = Address::from_mnemonic(&phrase, &path, prefix, cli.key_type)
                .context("Failed to derive addresses from mnemonic")?;
            print_address_set(prefix, cli.key_type, &set);
        },
        Command::PrivateKey { key } => {
            let key = match key {
                Some(x) => x,
                None => rpassword::prompt_password("Enter your private key (hex): ")
                    .context("Failed to read private key")?
            };
            let key = validate::private_key(key.trim())?;
            let set = Address::from_private_key_with_type(key, prefix, cli.key_type)
                .context("Failed to derive addresses from private key")?;
            print_address_set(prefix, cli.key_type, &set);
        },
        Command::PublicKey { key } => {
            let bytes = validate::public_key(&key)?;
            let result = Address::from_public_key_with_type(&bytes, prefix, cli.key_type)
                .context("Failed to derive address from public key")?;
            println!("{} Address: {}", capitalize(prefix), result.address);
            println!("Public Key: {}", encode_02x(&bytes));
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the mnemonic from a file or prompt for it without echo
fn get_mnemonic(mnemonic_file: Option<&Path>) -> Result<String> {
    let phrase = match mnemonic_file {
        Some(file) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read mnemonic file: {}", file.display()))?,
        None => rpassword::prompt_password("Enter your mnemonic: ")
            .context("Failed to read mnemonic")?
    };

    let phrase = phrase.trim().to_string();
    if phrase.is_empty() {
        return Err(anyhow!("Mnemonic cannot be empty"));
    }
    Ok(phrase)
}

fn print_address_set(prefix: &str, key_type: KeyType, set: &AddressSet) {
    let hex_label = if key_type.is_evm_compatible() { "Ethereum Address" } else { "Hex Address (not EVM)" };
    println!("{} Address: {}", capitalize(prefix), set.address);
    println!("{}: {}", hex_label, set.eth_address);
    println!("Private Key: {}", set.private_key);
    println!("Public Key: {}", set.public_key);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
