use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use serde::Serialize;
use tracing::{debug, debug_span, info};
use unicode_width::UnicodeWidthStr;
use yomi_core::settings::Settings;
use yomi_core::unicode::is_kana_reading;
use yomi_core::{sort_key, CharFlags, CollateError, DictionaryOrder};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct SortOptions {
    pub field: usize,
    pub delimiter: char,
    pub skip_blank: bool,
    pub tie_break: bool,
    pub show_key: bool,
    pub show_flags: bool,
    pub index_base: usize,
    pub json: bool,
}

impl SortOptions {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            field: s.input.reading_field,
            delimiter: s.input.delimiter(),
            skip_blank: s.input.skip_blank,
            tie_break: s.collation.tie_break,
            show_key: s.output.show_key,
            show_flags: s.output.show_flags,
            index_base: s.output.index_base,
            json: false,
        }
    }
}

/// One input line and the reading picked out of it.
#[derive(Debug, Clone)]
pub struct Record {
    pub line_no: usize,
    pub line: String,
    reading: Option<String>,
}

impl Record {
    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

pub fn read_records<R: BufRead>(input: R, opts: &SortOptions) -> Result<Vec<Record>, CliError> {
    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if opts.skip_blank && line.trim().is_empty() {
            continue;
        }
        let reading = line.split(opts.delimiter).nth(opts.field).map(str::to_string);
        if let Some(r) = reading.as_deref().filter(|r| !r.is_empty() && !is_kana_reading(r)) {
            debug!(line = i + 1, reading = r, "non-kana characters sort by code point");
        }
        records.push(Record {
            line_no: i + 1,
            line,
            reading,
        });
    }
    debug!(records = records.len(), "read input");
    Ok(records)
}

pub fn sort_records(records: &mut [Record], opts: &SortOptions) -> Result<(), CliError> {
    let order = if opts.tie_break {
        DictionaryOrder::new()
    } else {
        DictionaryOrder::primary_only()
    };
    match order.sort_by_reading(records, Record::reading) {
        Ok(()) => Ok(()),
        Err(CollateError::MissingReading { index }) => Err(CliError::MissingField {
            line: records[index].line_no,
            field: opts.field,
            line_text: records[index].line.clone(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[derive(Serialize)]
struct SortedLine<'a> {
    index: usize,
    line: &'a str,
    reading: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flags: Option<Vec<CharFlags>>,
}

fn flags_label(flags: &[CharFlags]) -> String {
    flags
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn render<W: Write>(records: &[Record], opts: &SortOptions, out: &mut W) -> Result<(), CliError> {
    let rows: Vec<SortedLine> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let reading = r.reading().unwrap_or_default();
            let key = sort_key(reading);
            SortedLine {
                index: i + opts.index_base,
                line: &r.line,
                reading,
                key: opts.show_key.then(|| key.key.clone()),
                flags: opts.show_flags.then_some(key.flags),
            }
        })
        .collect();

    if opts.json {
        for row in &rows {
            serde_json::to_writer(&mut *out, row)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let index_width = rows.last().map_or(1, |r| r.index.to_string().len());
    let line_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.line))
        .max()
        .unwrap_or(0);
    let key_width = rows
        .iter()
        .filter_map(|r| r.key.as_deref().map(UnicodeWidthStr::width))
        .max()
        .unwrap_or(0);

    for row in &rows {
        let mut text = format!("{:>index_width$}  ", row.index);
        match (&row.key, &row.flags) {
            (None, None) => text.push_str(row.line),
            (Some(key), None) => {
                text.push_str(&pad(row.line, line_width));
                text.push_str("  ");
                text.push_str(key);
            }
            (key, Some(flags)) => {
                text.push_str(&pad(row.line, line_width));
                if let Some(key) = key {
                    text.push_str("  ");
                    text.push_str(&pad(key, key_width));
                }
                text.push_str("  ");
                text.push_str(&flags_label(flags));
            }
        }
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}

/// Read, sort and print. `None` reads standard input.
pub fn run<W: Write>(file: Option<&str>, opts: &SortOptions, out: &mut W) -> Result<usize, CliError> {
    let _span = debug_span!("sort_cmd", file, field = opts.field).entered();
    let mut records = match file {
        Some(path) => read_records(BufReader::new(File::open(path)?), opts)?,
        None => read_records(io::stdin().lock(), opts)?,
    };
    sort_records(&mut records, opts)?;
    render(&records, opts, out)?;
    info!(records = records.len(), "sorted");
    Ok(records.len())
}

pub fn sort_cmd(file: Option<&str>, opts: &SortOptions) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(run(file, opts, &mut out), "Error: {}");
}
