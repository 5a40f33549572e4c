//! The `stream` module splits a multi-line Intel HEX string into its record lines and
//! decodes them one at a time.

use crate::error::IntelHexError;
use crate::record::Record;
use std::borrow::Cow;

/// Separates an Intel HEX string into record strings, dropping every '\r' and empty lines.
/// Lines are only copied when they contain a '\r'.
///
/// # Example
/// ```
/// use ihexrec::ihex_to_record_strs;
///
/// let lines = ihex_to_record_strs(":020000040000FA\r\n\r\n:00000001FF\r\n");
/// assert_eq!(lines, vec![":020000040000FA", ":00000001FF"]);
/// ```
#[must_use]
pub fn ihex_to_record_strs(ihex: &str) -> Vec<Cow<'_, str>> {
    ihex.split('\n')
        .map(|line| {
            if line.contains('\r') {
                Cow::Owned(line.replace('\r', ""))
            } else {
                Cow::Borrowed(line)
            }
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses every record of an Intel HEX string with [`Record::parse`].
///
/// Checksums are not verified and addresses are not interpreted.
///
/// # Errors
/// Returns the first record error together with its line number, counting
/// non-empty lines from 1.
pub fn parse_records(ihex: &str) -> Result<Vec<Record>, IntelHexError> {
    ihex_to_record_strs(ihex)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            Record::parse(&line).map_err(|err| {
                let line_number = idx + 1;
                tracing::debug!(line_number, record = %line, "rejected record: {err}");
                IntelHexError::ParseRecordsError(err.kind().clone(), line_number)
            })
        })
        .collect()
}
