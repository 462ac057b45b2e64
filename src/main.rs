use std::ffi::OsString;
use std::io::{Read, Write};

use itertools::Itertools;
use wideconv::{utf8_to_wide, wide_to_utf8};

#[derive(Copy, Clone)]
enum Direction {
    ToWide,
    ToUtf8,
}

#[derive(Copy, Clone)]
enum Endianness {
    BigEndian,
    LittleEndian,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let results = run(std::env::args_os().skip(1).collect());
    if results.is_err() {
        eprintln!("Usage: wideconv <to-wide|to-utf8> <le|be> [file]");
    }
    results
}

fn run(argv: Vec<OsString>) -> Result<(), Box<dyn std::error::Error>> {
    if argv.len() < 2 {
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    let direction = match argv[0].to_string_lossy().as_ref() {
        "to-wide" => Direction::ToWide,
        "to-utf8" => Direction::ToUtf8,
        _ => return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into()),
    };
    let endianness = match argv[1].to_string_lossy().as_ref() {
        "le" => Endianness::LittleEndian,
        "be" => Endianness::BigEndian,
        _ => return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into()),
    };
    let input = match argv.get(2) {
        Some(path) => std::fs::read(std::path::Path::new(path))?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buffer)?;
            buffer
        }
    };
    let output = match direction {
        Direction::ToWide => units_to_bytes(&utf8_to_wide::<u16>(&input)?, endianness),
        Direction::ToUtf8 => wide_to_utf8(&bytes_to_units(&input, endianness)?)?,
    };
    std::io::stdout().lock().write_all(&output)?;
    Ok(())
}

fn bytes_to_units(bytes: &[u8], endianness: Endianness) -> Result<Vec<u16>, std::io::Error> {
    if bytes.len() % 2 != 0 {
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidData));
    }
    Ok(bytes
        .iter()
        .copied()
        .tuples()
        .map(|(first, second)| match endianness {
            Endianness::BigEndian => u16::from_be_bytes([first, second]),
            Endianness::LittleEndian => u16::from_le_bytes([first, second]),
        })
        .collect())
}

fn units_to_bytes(units: &[u16], endianness: Endianness) -> Vec<u8> {
    units
        .iter()
        .flat_map(|unit| match endianness {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        })
        .collect()
}
