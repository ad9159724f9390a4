use mnemonic_core::{mnemonic_from_entropy, mnemonic_to_entropy_vec, resolve_strict};
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};

/// One published entropy/mnemonic pair
#[derive(Debug, Deserialize)]
struct Vector {
    language: String,
    entropy: String,
    mnemonic: String,
}

struct ValidationResult {
    name: String,
    success: bool,
    message: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let payload = if let Some(path) = args.get(1) {
        fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let vectors: Vec<Vector> = serde_json::from_str(&payload)?;

    let results: Vec<ValidationResult> = vectors
        .iter()
        .enumerate()
        .map(|(i, vector)| {
            let name = format!("#{:<3} {:<3} {}w", i, vector.language, vector.mnemonic.split_whitespace().count());
            run_validation(name, || check_vector(vector))
        })
        .collect();

    println!("================ Mnemonic Vectors ================");
    for result in &results {
        let status = if result.success {
            "✅ PASS"
        } else {
            "❌ FAIL"
        };
        println!("{:<14} {}", result.name, status);
        if !result.success {
            println!("    {}", result.message);
        }
    }

    let overall_success = results.iter().all(|r| r.success);
    println!("==================================================");
    if overall_success {
        println!("Overall status: ✅ All {} vectors verified", results.len());
        Ok(())
    } else {
        println!("Overall status: ❌ Validation failed");
        Err("vector validation failed".into())
    }
}

fn run_validation<F>(name: String, f: F) -> ValidationResult
where
    F: FnOnce() -> Result<(), String>,
{
    match f() {
        Ok(_) => ValidationResult {
            name,
            success: true,
            message: String::new(),
        },
        Err(err) => ValidationResult {
            name,
            success: false,
            message: err,
        },
    }
}

fn check_vector(vector: &Vector) -> Result<(), String> {
    let wordlist = resolve_strict(&vector.language).map_err(|e| e.to_string())?;
    let entropy = hex::decode(&vector.entropy).map_err(|e| e.to_string())?;

    let encoded = mnemonic_from_entropy(Some(wordlist), &entropy).map_err(|e| e.to_string())?;
    if encoded != vector.mnemonic {
        return Err("Encoded mnemonic does not match vector".to_string());
    }

    let decoded = mnemonic_to_entropy_vec(Some(wordlist), &vector.mnemonic).map_err(|e| e.to_string())?;
    if decoded.as_slice() != entropy.as_slice() {
        return Err("Decoded entropy does not match vector".to_string());
    }

    Ok(())
}
