//! Delimited text file record source
//!
//! Reads comma (or other single-character) separated files with a header
//! row. Fields may be wrapped in double quotes; a doubled quote inside a
//! quoted field is a literal quote. Quoted fields may span lines.

use crate::domain::errors::IngestError;
use crate::ports::outbound::{RecordRow, RecordSource, RecordStream};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record source backed by a delimited text file.
#[derive(Clone, Debug)]
pub struct DelimitedFileSource {
    path: PathBuf,
    name: String,
    delimiter: char,
}

impl DelimitedFileSource {
    /// Comma-separated source.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_delimiter(path, ',')
    }

    pub fn with_delimiter(path: impl AsRef<Path>, delimiter: char) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            path,
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for DelimitedFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<RecordStream, IngestError> {
        let file = File::open(&self.path)
            .map_err(|e| IngestError::data_source(&self.name, e.to_string()))?;
        let mut lines = BufReader::new(file).lines();
        let mut line_number = 0;

        let columns = match read_record(&mut lines, &mut line_number, self.delimiter) {
            Some((_, Ok(columns))) => columns,
            Some((line, Err(reason))) => {
                return Err(IngestError::data_source(
                    &self.name,
                    format!("line {}: {}", line, reason),
                ))
            }
            None => return Err(IngestError::data_source(&self.name, "file is empty")),
        };

        debug!(source = %self.name, columns = ?columns, "[mb-01] Opened delimited source");

        Ok(RecordStream {
            rows: Box::new(DelimitedRows {
                lines,
                source_name: self.name.clone(),
                delimiter: self.delimiter,
                width: columns.len(),
                line_number,
            }),
            columns,
        })
    }
}

/// Row iterator over the remaining lines of an opened file.
struct DelimitedRows {
    lines: Lines<BufReader<File>>,
    source_name: String,
    delimiter: char,
    width: usize,
    line_number: usize,
}

impl Iterator for DelimitedRows {
    type Item = Result<RecordRow, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, result) = read_record(&mut self.lines, &mut self.line_number, self.delimiter)?;
        let result = result
            .and_then(|fields| {
                if fields.len() == self.width {
                    Ok(fields)
                } else {
                    Err(format!(
                        "expected {} fields, found {}",
                        self.width,
                        fields.len()
                    ))
                }
            })
            .map_err(|reason| {
                IngestError::data_source(&self.source_name, format!("line {}: {}", line, reason))
            });
        Some(result)
    }
}

/// Next record and the line it starts on.
///
/// Blank lines between records are skipped. Physical lines are joined with
/// `\n` while a quoted field is still open; reaching end of input inside
/// one is an error.
fn read_record<B: BufRead>(
    lines: &mut Lines<B>,
    line_number: &mut usize,
    delimiter: char,
) -> Option<(usize, Result<RecordRow, String>)> {
    let mut record = String::new();
    let mut start = 0;

    loop {
        *line_number += 1;
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Some((*line_number, Err(e.to_string()))),
            None if start == 0 => return None,
            None => return Some((start, Err("unterminated quoted field".to_string()))),
        };
        let mut line = line.trim_end_matches('\r');
        if *line_number == 1 {
            line = line.trim_start_matches('\u{feff}');
        }

        if start == 0 {
            if line.trim().is_empty() {
                continue;
            }
            start = *line_number;
        } else {
            record.push('\n');
        }
        record.push_str(line);

        if let Some(fields) = split_record(&record, delimiter) {
            return Some((start, Ok(fields)));
        }
    }
}

/// Split one record into fields; `None` while a quoted field is still open.
fn split_record(record: &str, delimiter: char) -> Option<RecordRow> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = record.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        if c == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
            continue;
        }

        if c == '"' && at_field_start {
            in_quotes = true;
        } else {
            field.push(c);
        }
        at_field_start = false;
    }

    if in_quotes {
        return None;
    }
    fields.push(field);
    Some(fields)
}
