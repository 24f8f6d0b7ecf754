//! CSV front end for bulk conversion.
//!
//! The whole input is read and its header checked before anything is written,
//! so a schema error never leaves a partial output file behind.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::{debug, info, warn};

use crate::batch::{convert_rows, BatchJob, BatchSummary};
use crate::error::{Error, Result, SchemaError};

/// A fully read CSV input.
struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

/// Where the input and derived cells live in a row.
#[derive(Debug, PartialEq)]
struct ColumnPlan {
    input: [usize; 2],
    output: [usize; 2],
    headers: Vec<String>,
}

impl ColumnPlan {
    /// Locate the input columns and place the derived ones.
    ///
    /// Derived columns already present in the input are overwritten in place;
    /// otherwise they are appended.
    fn new(headers: &StringRecord, job: &BatchJob) -> std::result::Result<Self, SchemaError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let wanted = job.direction.input_columns(&job.columns);
        let missing: Vec<String> = wanted
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }
        let input = wanted.map(|name| position(name).unwrap_or_default());

        let mut out_headers: Vec<String> = headers.iter().map(str::to_string).collect();
        let output = job.direction.output_columns(&job.columns).map(|name| {
            match out_headers.iter().position(|h| h == name) {
                Some(idx) => idx,
                None => {
                    out_headers.push(name.to_string());
                    out_headers.len() - 1
                }
            }
        });

        Ok(Self {
            input,
            output,
            headers: out_headers,
        })
    }
}

fn read_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    for record in &records {
        if record.len() > headers.len() {
            return Err(SchemaError::RowWidth {
                line: record.position().map_or(0, |p| p.line()),
                got: record.len(),
                expected: headers.len(),
            }
            .into());
        }
    }

    Ok(Table { headers, records })
}

/// Run the per-row transform and build the output rows.
fn derive_rows(table: &Table, plan: &ColumnPlan, job: &BatchJob) -> (Vec<Vec<String>>, BatchSummary) {
    let cell = |record: &StringRecord, idx: usize| record.get(idx).unwrap_or("").to_string();

    // Short rows read as blank cells
    let inputs: Vec<(String, String)> = table
        .records
        .iter()
        .map(|r| (cell(r, plan.input[0]), cell(r, plan.input[1])))
        .collect();
    let derived = convert_rows(job.direction, &job.reference, &inputs);

    let mut summary = BatchSummary {
        rows: table.records.len(),
        ..Default::default()
    };

    let rows: Vec<Vec<String>> = table
        .records
        .iter()
        .zip(derived)
        .map(|(record, values)| {
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(plan.headers.len(), String::new());

            match values {
                Some([first, second]) => {
                    summary.converted += 1;
                    row[plan.output[0]] = first;
                    row[plan.output[1]] = second;
                }
                None => {
                    summary.skipped += 1;
                    warn!(
                        line = record.position().map_or(0, |p| p.line()),
                        "Row has no usable coordinates, leaving derived columns blank"
                    );
                    row[plan.output[0]].clear();
                    row[plan.output[1]].clear();
                }
            }
            row
        })
        .collect();

    (rows, summary)
}

fn write_rows<W: Write>(output: W, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Read, check, convert, and only then open the output and write it.
fn convert_table<R, W, F>(input: R, open_output: F, job: &BatchJob) -> Result<BatchSummary>
where
    R: Read,
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let table = read_table(input)?;
    let plan = ColumnPlan::new(&table.headers, job)?;
    debug!(direction = job.direction.name(), headers = ?plan.headers, "Planned columns");

    let (rows, summary) = derive_rows(&table, &plan, job);
    write_rows(open_output()?, &plan.headers, &rows)?;

    info!(
        rows = summary.rows,
        converted = summary.converted,
        skipped = summary.skipped,
        "CSV conversion finished"
    );
    Ok(summary)
}

/// Convert a CSV stream, appending (or overwriting) the derived columns.
pub fn convert_csv<R: Read, W: Write>(input: R, output: W, job: &BatchJob) -> Result<BatchSummary> {
    convert_table(input, || Ok(output), job)
}

/// Convert the CSV file at `input` into `output`.
///
/// `output` is only created once the input has been read and its header accepted.
pub fn convert_csv_file(input: &Path, output: &Path, job: &BatchJob) -> Result<BatchSummary> {
    debug!(input = %input.display(), output = %output.display(), "Converting CSV file");
    let file = File::open(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;
    convert_table(
        file,
        || {
            File::create(output).map_err(|source| Error::Io {
                path: output.to_path_buf(),
                source,
            })
        },
        job,
    )
}
