//! Batch CLI: extract delivery-note records from HTML files and ZIP
//! bundles.
//!
//! Usage: `extract_batch [-o OUTPUT_DIR] PATH...`
//!
//! Each PATH may be an `.html` file, a `.zip` bundle, or a directory
//! scanned (non-recursively) for both. Writes `irsaliye_verileri.csv`
//! and `irsaliye_verileri.json` into the output directory and prints a
//! summary of the run.

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use irsaliye_extract::archive::{expand_zip, is_document_name};
use irsaliye_extract::{export, run_batch, DocumentInput};

const CSV_NAME: &str = "irsaliye_verileri.csv";
const JSON_NAME: &str = "irsaliye_verileri.json";

fn is_bundle_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn collect_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(input)?
                .collect::<Result<Vec<_>, std::io::Error>>()?
                .into_iter()
                .map(|entry| entry.path())
                .collect();
            entries.sort();
            for path in entries {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if path.is_file() && (is_document_name(name) || is_bundle_name(name)) {
                    files.push(path);
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("input does not exist: {}", input.display()).into());
        }
    }
    Ok(files)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut output_dir = PathBuf::from(".");
    let mut inputs: Vec<PathBuf> = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "-o" {
            output_dir = PathBuf::from(args.next().ok_or("missing value for -o")?);
        } else {
            inputs.push(PathBuf::from(arg));
        }
    }

    if inputs.is_empty() {
        eprintln!("usage: extract_batch [-o OUTPUT_DIR] PATH...");
        std::process::exit(1);
    }

    let mut items: Vec<DocumentInput> = Vec::new();
    for path in collect_files(&inputs)? {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = fs::read(&path)?;
        if is_bundle_name(&name) {
            items.extend(expand_zip(&bytes)?);
        } else {
            items.push(DocumentInput { name, bytes });
        }
    }

    let outcome = run_batch(items);

    if outcome.records.is_empty() {
        println!(
            "Processed {}/{} documents; no records could be extracted.",
            outcome.succeeded, outcome.attempted
        );
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;
    let csv_path = output_dir.join(CSV_NAME);
    let json_path = output_dir.join(JSON_NAME);
    export::write_csv(&outcome.records, fs::File::create(&csv_path)?)?;
    export::write_json(&outcome.records, fs::File::create(&json_path)?)?;

    println!(
        "Processed {}/{} documents, {} records extracted.",
        outcome.succeeded,
        outcome.attempted,
        outcome.records.len()
    );
    println!("Wrote {} and {}", csv_path.display(), json_path.display());
    Ok(())
}
