use std::io::{self, Write};

use serde::Serialize;
use yomi_core::{decompose, DictionaryOrder, PhoneticUnit};

use crate::error::CliError;

#[derive(Serialize)]
struct KeyReport<'a> {
    reading: &'a str,
    key: String,
    units: Vec<PhoneticUnit>,
}

/// Print the canonical key of each reading and the units it decomposes into.
pub fn write_keys<W: Write>(readings: &[String], json: bool, out: &mut W) -> Result<(), CliError> {
    for reading in readings {
        let units = decompose(reading);
        let key: String = units.iter().map(|u| u.ch).collect();
        if json {
            let report = KeyReport {
                reading,
                key,
                units,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
            continue;
        }
        writeln!(out, "{reading} → {key}")?;
        for unit in &units {
            writeln!(out, "  {}  {:>2}  {}", unit.ch, unit.flags.bits(), unit.flags)?;
        }
    }
    Ok(())
}

pub fn key_cmd(readings: &[String], json: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(write_keys(readings, json, &mut out), "Error: {}");
}

pub fn compare_cmd(a: &str, b: &str, tie_break: bool) {
    let order = if tie_break {
        DictionaryOrder::new()
    } else {
        DictionaryOrder::primary_only()
    };
    let result = order.compare(a, b);
    let relation = match result.signum() {
        -1 => "<",
        1 => ">",
        _ => "=",
    };
    println!("{result}\t{a} {relation} {b}");
}
