//! CSV serialization of normalized wallet transaction records.

use std::path::Path;
use txledger::NormalizedRecord;

/// Output columns, in order. Written even when there are no records.
pub const CSV_HEADER: [&str; 10] = [
    "Transaction Hash",
    "Date & Time",
    "From Address",
    "To Address",
    "Transaction Type",
    "Asset Contract Address",
    "Asset Symbol / Name",
    "Token ID",
    "Value / Amount",
    "Gas Fee (ETH)",
];

/// Write records to a CSV file at `out_path`, fixed header first, one row
/// per record in record order.
pub fn write_csv(
    records: &[NormalizedRecord],
    out_path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(out_path.as_ref())
        .map_err(ExportError::Csv)?;
    write_records(&mut wtr, records)
}

/// Render records as a CSV string (for testing or in-memory use).
pub fn to_csv_string(records: &[NormalizedRecord]) -> Result<String, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    write_records(&mut wtr, records)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Io(std::io::Error::other(e.to_string())))
}

fn write_records<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    records: &[NormalizedRecord],
) -> Result<(), ExportError> {
    wtr.write_record(CSV_HEADER).map_err(ExportError::Csv)?;
    for rec in records {
        wtr.serialize(rec).map_err(ExportError::Csv)?;
    }
    wtr.flush().map_err(ExportError::Io)?;
    Ok(())
}

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "csv: {}", e),
            ExportError::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}
