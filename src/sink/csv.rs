use crate::model::{TeeRow, columns};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one CSV row to any writer.
///
/// # Errors
///
/// Will return `Err` if the writer fails
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if first {
            first = false;
        } else {
            write!(w, "{SEP}")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Header plus one line per row. Sentinels are written as-is.
///
/// # Errors
///
/// Will return `Err` if the writer fails
pub fn write_tee_rows<W: Write>(mut w: W, rows: &[TeeRow]) -> io::Result<()> {
    let header: Vec<String> = columns().into_iter().map(|c| c.name).collect();
    write_row(&mut w, &header)?;
    for row in rows {
        write_row(&mut w, &row.values())?;
    }
    w.flush()
}

/// Write the rows to `path` as UTF-8 CSV, creating the parent directory.
///
/// # Errors
///
/// Will return `Err` if the directory or file can't be created or written
pub fn write_csv_file(path: &Path, rows: &[TeeRow]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    write_tee_rows(BufWriter::new(file), rows)
}
