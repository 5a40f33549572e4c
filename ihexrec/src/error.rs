//! The `error` module defines the [`IntelHexError`] enum that describes the errors that
//! can occur when creating or parsing Intel HEX records.
//! It contains the three pieces of information:
//! 1. When the error occurs, e.g., during parsing or creating the record.
//! 2. What kind of error was encountered (via [`IntelHexErrorKind`] enum), including
//!    the offending input value.
//! 3. What is the line number (if applicable), e.g., at which line of a multi-line
//!    hex string the parsing failed.

use crate::record::RecordType;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelHexError {
    CreateRecordError(IntelHexErrorKind),
    ParseRecordError(IntelHexErrorKind),
    ParseRecordsError(IntelHexErrorKind, usize),
}

impl IntelHexError {
    /// Returns the kind of error, regardless of the operation that raised it.
    #[must_use]
    pub const fn kind(&self) -> &IntelHexErrorKind {
        match self {
            Self::CreateRecordError(kind)
            | Self::ParseRecordError(kind)
            | Self::ParseRecordsError(kind, _) => kind,
        }
    }
}

impl fmt::Display for IntelHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateRecordError(base_err) => {
                write!(
                    f,
                    "Error encountered during creation of hex record:\n{base_err}",
                )
            }
            Self::ParseRecordError(base_err) => {
                write!(f, "Error encountered during record parsing:\n{base_err}")
            }
            Self::ParseRecordsError(base_err, line) => {
                write!(
                    f,
                    "Error encountered during record parsing at line #{line} of the hex string:\n{base_err}",
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelHexErrorKind {
    /// Record address does not fit into the address field
    AddressOutOfRange(RecordType, usize),
    /// Record payload is larger than the supported maximum
    PayloadTooLarge(RecordType, usize),
    /// Record type code is outside the standard and custom ranges
    InvalidRecordType(u8),
    /// Record is shorter than the smallest valid
    RecordTooShort(String),
    /// Record is longer than the largest valid
    RecordTooLong(String),
    /// Record does not begin with a ':'
    MissingStartCode(String),
    /// Record handed to the field decoder does not begin with a ':'
    NotStartingWithColon(String),
    /// Record hex digits cannot be grouped in pairs
    OddHexLength(String),
    /// Record contains non-hexadecimal characters
    ContainsInvalidCharacters(String),
    /// Decoded length differs from the one announced by the byte count:
    /// (record, expected bytes, found bytes)
    LengthMismatch(String, usize, usize),
    /// Board ID of a Block Start record does not fit into 16 bits
    BoardIdOutOfRange(usize),
    /// Record checksum mismatch: (expected, found)
    RecordChecksumMismatch(u8, u8),
}

impl fmt::Display for IntelHexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressOutOfRange(rtype, address) => {
                write!(f, "Record ({rtype:?}) address out of range: 0x{address:X}")
            }
            Self::PayloadTooLarge(rtype, length) => {
                write!(f, "Record ({rtype:?}) data has too many bytes ({length})")
            }
            Self::InvalidRecordType(code) => {
                write!(f, "Record type '{code:02X}' is not valid")
            }
            Self::RecordTooShort(record) => {
                write!(f, "Record length too small: {record}")
            }
            Self::RecordTooLong(record) => {
                write!(f, "Record length is too large: {record}")
            }
            Self::MissingStartCode(record) => {
                write!(f, "Record does not start with a \":\": {record}")
            }
            Self::NotStartingWithColon(record) => {
                write!(
                    f,
                    "Could not parse Intel Hex record \"{record}\": it does not start with a \":\""
                )
            }
            Self::OddHexLength(record) => {
                write!(
                    f,
                    "Could not parse Intel Hex record \"{record}\": hex digit count is not divisible by 2"
                )
            }
            Self::ContainsInvalidCharacters(record) => {
                write!(
                    f,
                    "Could not parse Intel Hex record \"{record}\": invalid character(s)"
                )
            }
            Self::LengthMismatch(record, expected, actual) => {
                write!(
                    f,
                    "Parsed record \"{record}\" does not match the length indicated by the byte count. Expected: {expected}; Length: {actual}"
                )
            }
            Self::BoardIdOutOfRange(board_id) => {
                write!(
                    f,
                    "Board ID out of range when creating Block Start record: 0x{board_id:X}"
                )
            }
            Self::RecordChecksumMismatch(expected, actual) => {
                write!(
                    f,
                    "Invalid record checksum - expected: 0x{expected:02X}, found: 0x{actual:02X}"
                )
            }
        }
    }
}

impl Error for IntelHexError {}
impl Error for IntelHexErrorKind {}
