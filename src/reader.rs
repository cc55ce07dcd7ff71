use tbl::Result;

use std::{
    path::PathBuf,
    fs::File,
};

use csv::{Reader, ReaderBuilder};

/// Lines starting with `#` are treated as comments in teller scripts. Cells are not trimmed, so
/// PINs and account numbers reach the ledger byte for byte, and short rows are still read so
/// they can be reported.
pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(filepath)?;

    return Ok(reader);
}
