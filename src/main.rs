use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mnemonic_core::{
    generate_mnemonic, log_info, is_valid_mnemonic, mnemonic_from_entropy, mnemonic_to_entropy_vec,
    resolve_strict, supported_languages, utils::CodecSettings, EntropyStrength, Wordlist,
};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Convert between entropy and BIP-39 mnemonic phrases")]
struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Wordlist language code (en es fr it jp zhs zht)
    #[arg(long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random mnemonic
    Generate {
        /// Entropy size in bits (128, 160, 192, 224, 256)
        #[arg(long)]
        bits: Option<usize>,
    },
    /// Encode hex entropy as a mnemonic
    Encode {
        /// Entropy as hex (16, 20, 24, 28 or 32 bytes)
        entropy: String,
    },
    /// Decode a mnemonic back to hex entropy
    Decode {
        /// Space-separated mnemonic phrase
        phrase: String,
    },
    /// Check a mnemonic's words and checksum
    Validate {
        /// Space-separated mnemonic phrase
        phrase: String,
    },
    /// List supported language codes
    Languages,
}

#[derive(Serialize)]
struct MnemonicOutput<'a> {
    language: &'a str,
    mnemonic: String,
    word_count: usize,
}

#[derive(Serialize)]
struct EntropyOutput<'a> {
    language: &'a str,
    entropy: String,
    bits: usize,
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    language: &'a str,
    valid: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = CodecSettings::from_env().context("invalid MNEMONIC_* environment")?;
    settings.apply();

    let wordlist: &Wordlist = match cli.lang.as_deref() {
        Some(code) => resolve_strict(code)?,
        None => settings.wordlist(),
    };
    let language = wordlist.language_code();

    match cli.command {
        Commands::Generate { bits } => {
            let strength = match bits {
                Some(bits) => EntropyStrength::from_bits(bits)
                    .ok_or_else(|| anyhow!("unsupported entropy size: {} bits", bits))?,
                None => settings.default_strength,
            };
            let mnemonic = generate_mnemonic(Some(wordlist), strength)?;
            log_info!(
                "cli",
                "Generated mnemonic",
                language = language,
                bits = strength.bits(),
            );
            print_mnemonic(cli.json, language, mnemonic)?;
        }
        Commands::Encode { entropy } => {
            let bytes = zeroize::Zeroizing::new(hex::decode(entropy.trim())?);
            let mnemonic = mnemonic_from_entropy(Some(wordlist), &bytes)?;
            print_mnemonic(cli.json, language, mnemonic)?;
        }
        Commands::Decode { phrase } => {
            let entropy = mnemonic_to_entropy_vec(Some(wordlist), &phrase)?;
            let output = EntropyOutput {
                language,
                entropy: hex::encode(entropy.as_slice()),
                bits: entropy.len() * 8,
            };
            if cli.json {
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{}", output.entropy);
            }
        }
        Commands::Validate { phrase } => {
            let valid = is_valid_mnemonic(Some(wordlist), &phrase);
            if cli.json {
                println!("{}", serde_json::to_string(&ValidationOutput { language, valid })?);
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
            if !valid {
                return Err(anyhow!("mnemonic is not valid for language '{}'", language));
            }
        }
        Commands::Languages => {
            if cli.json {
                println!("{}", serde_json::to_string(supported_languages())?);
            } else {
                for code in supported_languages() {
                    println!("{}", code);
                }
            }
        }
    }

    Ok(())
}

fn print_mnemonic(json: bool, language: &str, mnemonic: String) -> Result<()> {
    if json {
        let output = MnemonicOutput {
            language,
            word_count: mnemonic.split(' ').count(),
            mnemonic,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", mnemonic);
    }
    Ok(())
}
