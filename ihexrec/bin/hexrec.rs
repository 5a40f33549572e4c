use ihexrec::{Record, RecordType};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");

    println!(" ------------------------------------------");
    println!("|  Intel HEX Record Utility  |  v{version}  |");
    println!(" ------------------------------------------");
    println!("\nUsage:");
    println!("  hexrec create <address> <type> [data]");
    println!("  hexrec parse <record>");
    println!("  hexrec type <record>");
    println!("  hexrec verify <record>");
    println!("  hexrec custom <record>");
    println!("  hexrec eof");
    println!("  hexrec ela <address>");
    println!("  hexrec block-start <board-id>");
    println!("  hexrec block-end <pad-len>");
    println!("  hexrec pad <pad-len>");
    println!("  hexrec capacity");
    println!("\nNumbers and data are hex, with an optional 0x prefix for numbers.");
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.");
    println!("\nExamples:");
    println!("  hexrec create 0xF870 00 00000000");
    println!("  hexrec parse :0400000A9901C0DEBA");
    println!("  hexrec block-start 0x9901");
    println!("  hexrec custom :105D3000E060E3802046FFF765FF0123A1881A4653");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    // Dispatch and immediately handle results
    if let Err(e) = run_dispatch(command, &args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_dispatch(cmd: &str, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        "create" => {
            let addr_str = args.get(2).ok_or("Missing record address")?;
            let type_str = args.get(3).ok_or("Missing record type")?;

            let address =
                parse_hex_str(addr_str).map_err(|_e| format!("Invalid address: {addr_str}"))?;
            let code = u8::try_from(
                parse_hex_str(type_str).map_err(|_e| format!("Invalid record type: {type_str}"))?,
            )
            .map_err(|_e| format!("Invalid record type: {type_str}"))?;
            let record_type = RecordType::try_from(code)?;

            // Payload is optional, e.g. for End Of File records
            let data = match args.get(4) {
                Some(data_str) => hex::decode(data_str.trim())
                    .map_err(|e| format!("Invalid data '{data_str}': {e}"))?,
                None => Vec::new(),
            };

            println!("{}", Record::create(address, record_type, &data)?);
            Ok(())
        }
        "parse" => {
            let record = Record::parse(get_record_arg(args)?)?;
            print_record(&record);
            Ok(())
        }
        "type" => {
            let record_type = RecordType::from_record(get_record_arg(args)?)?;
            println!("{record_type:?} (0x{:02X})", record_type as u8);
            Ok(())
        }
        "verify" => {
            let record = Record::parse(get_record_arg(args)?)?;
            record.verify_checksum()?;
            println!("Checksum OK: 0x{:02X}", record.checksum());
            Ok(())
        }
        "custom" => {
            println!(
                "{}",
                ihexrec::convert_record_to_custom_data(get_record_arg(args)?)?
            );
            Ok(())
        }
        "eof" => {
            println!("{}", ihexrec::end_of_file_record());
            Ok(())
        }
        "ela" => {
            let addr_str = args.get(2).ok_or("Missing address")?;
            let address =
                parse_hex_str(addr_str).map_err(|_e| format!("Invalid address: {addr_str}"))?;
            println!("{}", ihexrec::ext_lin_address_record(address)?);
            Ok(())
        }
        "block-start" => {
            let id_str = args.get(2).ok_or("Missing board ID")?;
            let board_id =
                parse_hex_str(id_str).map_err(|_e| format!("Invalid board ID: {id_str}"))?;
            println!("{}", ihexrec::block_start_record(board_id)?);
            Ok(())
        }
        "block-end" | "pad" => {
            let len_str = args.get(2).ok_or("Missing padding length")?;
            let pad_len =
                parse_hex_str(len_str).map_err(|_e| format!("Invalid padding length: {len_str}"))?;
            let record = if cmd == "pad" {
                ihexrec::padded_data_record(pad_len)?
            } else {
                ihexrec::block_end_record(pad_len)?
            };
            println!("{record}");
            Ok(())
        }
        "capacity" => {
            println!("{}", ihexrec::record_padding_capacity());
            Ok(())
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn print_record(record: &Record) {
    println!("Byte Count:  0x{:02X}", record.byte_count());
    println!("Address:     0x{:04X}", record.address());
    println!(
        "Record Type: {:?} (0x{:02X})",
        record.record_type(), record.record_type() as u8
    );
    println!("Data:        {}", hex::encode_upper(record.data()));
    println!("Checksum:    0x{:02X}", record.checksum());
}

// =============================== HELPER FUNCTIONS ===============================

/// Parse a string as a hex number (with optional 0x prefix)
fn parse_hex_str(s: &str) -> Result<usize, std::num::ParseIntError> {
    let s = s.trim();

    // Handle explicit 0x prefix
    if let Some(hex_str) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return usize::from_str_radix(hex_str, 16);
    }

    // Parse as hex without prefix
    usize::from_str_radix(s, 16)
}

/// Get the record line argument
fn get_record_arg(args: &[String]) -> Result<&str, Box<dyn std::error::Error>> {
    Ok(args.get(2).ok_or("Missing record")?.as_str())
}
