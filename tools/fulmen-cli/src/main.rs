use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fulmen::{to_bytes, Decode, Reader, Value};

#[derive(Parser)]
#[command(name = "fulmen-cli", about = "Inspect fulmen/MessagePack encoded data", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode every value in the input and print the trees
    Inspect {
        /// File containing encoded data
        #[arg(required_unless_present = "hex")]
        file: Option<PathBuf>,

        /// Hex string to decode instead of a file
        #[arg(long)]
        hex: Option<String>,
    },
    /// Encode a sample record, hex-dump it, and decode it back
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Inspect { file, hex } => run_inspect(file, hex),
        Command::Demo => run_demo(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_inspect(file: Option<PathBuf>, hex_input: Option<String>) -> Result<(), String> {
    let data = match (file, hex_input) {
        (_, Some(hex_input)) => hex::decode(hex_input.trim())
            .map_err(|e| format!("invalid hex input: {e}"))?,
        (Some(path), None) => fs::read(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        (None, None) => return Err("either a file or --hex is required".to_string()),
    };

    let mut reader = Reader::from_slice(&data);
    let mut index = 0usize;
    while reader.has_remaining() {
        let offset = reader.position();
        let value = Value::decode(&mut reader).map_err(|e| e.to_string())?;
        println!("value #{index} at offset {offset}:");
        print_value(&value, 1);
        index += 1;
    }
    if index == 0 {
        println!("(empty input)");
    }
    Ok(())
}

fn run_demo() -> Result<(), String> {
    let record = Value::Map(vec![
        (Value::string("name"), Value::string("Alice")),
        (Value::string("age"), Value::Int(30)),
        (Value::string("active"), Value::Bool(true)),
    ]);

    let encoded = to_bytes(&record).map_err(|e| e.to_string())?;
    println!("encoded {} bytes: {}", encoded.len(), hex::encode(&encoded));

    let mut reader = Reader::new(encoded);
    let decoded = Value::decode(&mut reader).map_err(|e| e.to_string())?;
    println!("decoded:");
    print_value(&decoded, 1);
    Ok(())
}

fn print_value(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Nil => println!("{pad}nil"),
        Value::Bool(v) => println!("{pad}bool: {v}"),
        Value::UInt(v) => println!("{pad}uint: {v}"),
        Value::Int(v) => println!("{pad}int: {v}"),
        Value::Float32(v) => println!("{pad}float32: {v}"),
        Value::Float64(v) => println!("{pad}float64: {v}"),
        Value::Str(bytes) => match value.as_str() {
            Some(s) => println!("{pad}str: {s:?}"),
            None => println!("{pad}str (non-utf8): {}", hex::encode(bytes)),
        },
        Value::Bin(bytes) => println!("{pad}bin[{}]: {}", bytes.len(), hex::encode(bytes)),
        Value::Array(items) => {
            println!("{pad}array[{}]:", items.len());
            for item in items {
                print_value(item, indent + 1);
            }
        }
        Value::Map(entries) => {
            println!("{pad}map[{}]:", entries.len());
            for (key, val) in entries {
                print_value(key, indent + 1);
                print_value(val, indent + 2);
            }
        }
        Value::Ext { kind, data } => {
            println!("{pad}ext(type {kind})[{}]: {}", data.len(), hex::encode(data))
        }
        Value::Timestamp { seconds, nanos } => {
            println!("{pad}timestamp: {seconds}s + {nanos}ns")
        }
    }
}
