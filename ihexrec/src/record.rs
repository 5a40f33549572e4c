//! The `record` module defines the [`Record`] and [`RecordType`] which are used for parsing
//! (and generating) single Intel HEX records, including the custom record types used to
//! pack several firmware images into one hex stream.

use crate::error::{IntelHexError, IntelHexErrorKind};
use std::fmt;
use std::ops::RangeInclusive;

mod ranges {
    use std::ops::Range;
    pub const RECORD_TYPE_RANGE: Range<usize> = 7..9;
}

pub(crate) mod sizes {
    /// Largest payload handled by the bounded codec
    pub const MAX_DATA_BYTES: usize = 16;
    /// Largest payload the record format can describe
    pub const MAX_UNBOUNDED_DATA_BYTES: usize = u8::MAX as usize;
    // len + addr + rtype
    pub const HEADER_BYTES: usize = 1 + 2 + 1;
    // ':' + (len + addr + rtype + checksum) in hex digits
    pub const SMALLEST_RECORD: usize = 1 + (HEADER_BYTES + 1) * 2;
    pub const LARGEST_RECORD: usize = SMALLEST_RECORD + MAX_DATA_BYTES * 2;
    pub const LARGEST_UNBOUNDED_RECORD: usize = SMALLEST_RECORD + MAX_UNBOUNDED_DATA_BYTES * 2;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordType {
    Data = 0x00,
    EndOfFile = 0x01,
    ExtendedSegmentAddress = 0x02,
    StartSegmentAddress = 0x03,
    ExtendedLinearAddress = 0x04,
    StartLinearAddress = 0x05,
    // Custom types for fat binaries
    BlockStart = 0x0A,
    BlockEnd = 0x0B,
    PaddedData = 0x0C,
    CustomData = 0x0D,
    OtherData = 0x0E,
}

impl RecordType {
    const STANDARD_CODES: RangeInclusive<u8> = 0x00..=0x05;
    const CUSTOM_CODES: RangeInclusive<u8> = 0x0A..=0x0E;

    /// Checks whether `code` belongs to the standard or to the custom range of record types.
    ///
    /// # Example
    /// ```
    /// use ihexrec::RecordType;
    ///
    /// assert!(RecordType::is_valid(0x05));
    /// assert!(!RecordType::is_valid(0x06));
    /// assert!(RecordType::is_valid(0x0A));
    /// ```
    #[must_use]
    pub fn is_valid(code: u8) -> bool {
        Self::STANDARD_CODES.contains(&code) || Self::CUSTOM_CODES.contains(&code)
    }

    /// Whether the record type is one of the vendor-specific fat binary types.
    #[must_use]
    pub fn is_custom(self) -> bool {
        Self::CUSTOM_CODES.contains(&(self as u8))
    }

    /// Reads the record type from a record line without decoding the rest of it.
    ///
    /// The line goes through [`Record::validate`] first. Byte count and checksum are not
    /// verified.
    ///
    /// # Errors
    /// - Returns an error if the record fails validation
    /// - Returns an error if the type field is not hexadecimal or not a valid record type
    ///
    /// # Example
    /// ```
    /// use ihexrec::RecordType;
    ///
    /// let rtype = RecordType::from_record(":0400000A9901C0DEBA").unwrap();
    /// assert_eq!(rtype, RecordType::BlockStart);
    /// ```
    pub fn from_record(line: &str) -> Result<Self, IntelHexError> {
        let line = strip_line_terminator(line);
        Record::validate(line)?;

        let code = line
            .get(ranges::RECORD_TYPE_RANGE)
            .filter(|field| field.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|field| u8::from_str_radix(field, 16).ok())
            .ok_or_else(|| {
                IntelHexError::ParseRecordError(IntelHexErrorKind::ContainsInvalidCharacters(
                    line.to_owned(),
                ))
            })?;

        Self::try_from(code).map_err(IntelHexError::ParseRecordError)
    }
}

impl TryFrom<u8> for RecordType {
    type Error = IntelHexErrorKind;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if !Self::is_valid(code) {
            return Err(IntelHexErrorKind::InvalidRecordType(code));
        }
        Ok(match code {
            0x00 => Self::Data,
            0x01 => Self::EndOfFile,
            0x02 => Self::ExtendedSegmentAddress,
            0x03 => Self::StartSegmentAddress,
            0x04 => Self::ExtendedLinearAddress,
            0x05 => Self::StartLinearAddress,
            0x0A => Self::BlockStart,
            0x0B => Self::BlockEnd,
            0x0C => Self::PaddedData,
            0x0D => Self::CustomData,
            // 0x0E is the only code left after the range check
            _ => Self::OtherData,
        })
    }
}

/// A single decoded Intel HEX record.
///
/// Only [`Record::parse`] and [`Record::parse_unbounded`] build it, so `byte_count`
/// always equals the payload length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) byte_count: u8,
    pub(crate) address: u16,
    pub(crate) record_type: RecordType,
    pub(crate) data: Vec<u8>,
    pub(crate) checksum: u8,
}

/// Drops any mix of trailing '\r' and '\n'.
fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(|ch| ch == '\r' || ch == '\n')
}

fn sum_bytes<'a>(bytes: impl IntoIterator<Item = &'a u8>) -> u8 {
    bytes.into_iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}

impl Record {
    #[must_use]
    pub const fn byte_count(&self) -> u8 {
        self.byte_count
    }

    #[must_use]
    pub const fn address(&self) -> u16 {
        self.address
    }

    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Payload bytes, without the checksum.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Checksum as found in the record line.
    #[must_use]
    pub const fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Calculate checksum from u8 array.
    ///
    /// # Example
    /// ```
    /// use ihexrec::Record;
    ///
    /// assert_eq!(Record::calculate_checksum(&[0x00, 0x00, 0x00, 0x01]), 0xFF);
    /// ```
    #[must_use]
    pub fn calculate_checksum(data: &[u8]) -> u8 {
        (!sum_bytes(data)).wrapping_add(1) // two's complement
    }

    /// Calculate checksum from the stored fields of the Record instance.
    #[must_use]
    pub fn expected_checksum(&self) -> u8 {
        let [addr_high, addr_low] = self.address.to_be_bytes();
        let header = [self.byte_count, addr_high, addr_low, self.record_type as u8];
        (!sum_bytes(header.iter().chain(&self.data))).wrapping_add(1)
    }

    /// Compares the stored checksum against the one computed from the other fields.
    /// Parsing never does this on its own.
    ///
    /// # Errors
    /// Returns an error if the checksums differ.
    ///
    /// # Example
    /// ```
    /// use ihexrec::Record;
    ///
    /// let record = Record::parse(":0400000A9901C0DEBB").unwrap();
    /// assert!(record.verify_checksum().is_err());
    /// ```
    pub fn verify_checksum(&self) -> Result<(), IntelHexError> {
        let expected = self.expected_checksum();
        if expected != self.checksum {
            return Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordChecksumMismatch(expected, self.checksum),
            ));
        }
        Ok(())
    }

    /// Create the record string from address, type and data slice.
    ///
    /// The output uses uppercase hex digits and carries no line terminator.
    ///
    /// # Errors
    /// - Returns an error if the address does not fit into 16 bits
    /// - Returns an error if the payload is longer than 16 bytes
    ///
    /// # Example
    /// ```
    /// use ihexrec::{Record, RecordType};
    ///
    /// let record = Record::create(0xF870, RecordType::Data, &[0x00; 4]).unwrap();
    /// assert_eq!(record, ":04F870000000000094");
    /// ```
    pub fn create(
        address: usize,
        record_type: RecordType,
        data: &[u8],
    ) -> Result<String, IntelHexError> {
        let Ok(addr16) = u16::try_from(address) else {
            return Err(IntelHexError::CreateRecordError(
                IntelHexErrorKind::AddressOutOfRange(record_type, address),
            ));
        };

        let length = data.len();
        if length > sizes::MAX_DATA_BYTES {
            return Err(IntelHexError::CreateRecordError(
                IntelHexErrorKind::PayloadTooLarge(record_type, length),
            ));
        }

        // Length, address, record type and payload, in wire order
        let mut content = Vec::with_capacity(sizes::HEADER_BYTES + length);
        #[allow(clippy::cast_possible_truncation)]
        content.push(length as u8);
        content.extend_from_slice(&addr16.to_be_bytes());
        content.push(record_type as u8);
        content.extend_from_slice(data);

        let checksum = Self::calculate_checksum(&content);

        Ok(format!(":{}{checksum:02X}", hex::encode_upper(&content)))
    }

    /// Check the record line for the right length and the start code.
    /// Trailing line terminators are ignored.
    ///
    /// # Errors
    /// - Returns an error if the record is shorter than 11 or longer than 43 characters
    /// - Returns an error if the record does not start with ':'
    pub fn validate(line: &str) -> Result<(), IntelHexError> {
        let line = strip_line_terminator(line);
        Self::check_length(line, sizes::LARGEST_RECORD)?;

        if !line.starts_with(':') {
            return Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::MissingStartCode(line.to_owned()),
            ));
        }
        Ok(())
    }

    /// Parse the record string into Record.
    ///
    /// The checksum is returned as found in the line, see [`Record::verify_checksum`].
    ///
    /// # Errors
    /// - Returns an error if the record fails [`Record::validate`]
    /// - Returns an error if the record is not made of hex digit pairs
    /// - Returns an error if the record length differs from its byte count
    /// - Returns an error if the record type is invalid
    ///
    /// # Example
    /// ```
    /// use ihexrec::{Record, RecordType};
    ///
    /// let record = Record::parse(":04F870000000000094\r\n").unwrap();
    /// assert_eq!(record.address(), 0xF870);
    /// assert_eq!(record.record_type(), RecordType::Data);
    /// assert_eq!(record.data(), [0x00; 4]);
    /// ```
    pub fn parse(line: &str) -> Result<Self, IntelHexError> {
        let line = strip_line_terminator(line);
        Self::validate(line)?;
        Self::decode_fields(line)
    }

    /// Parse a record string with a payload of up to 255 bytes into Record.
    ///
    /// Same as [`Record::parse`] but without the 16 byte payload limit, so records
    /// written by other tools (e.g. with 32 byte data records) can be read.
    ///
    /// # Errors
    /// - Returns an error if the record is shorter than 11 or longer than 521 characters
    /// - Returns an error if the record does not start with ':'
    /// - Returns an error if the record is not made of hex digit pairs
    /// - Returns an error if the record length differs from its byte count
    /// - Returns an error if the record type is invalid
    pub fn parse_unbounded(line: &str) -> Result<Self, IntelHexError> {
        let line = strip_line_terminator(line);
        Self::check_length(line, sizes::LARGEST_UNBOUNDED_RECORD)?;
        Self::decode_fields(line)
    }

    fn check_length(line: &str, largest: usize) -> Result<(), IntelHexError> {
        if line.len() < sizes::SMALLEST_RECORD {
            return Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooShort(line.to_owned()),
            ));
        } else if line.len() > largest {
            return Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooLong(line.to_owned()),
            ));
        }
        Ok(())
    }

    fn decode_fields(line: &str) -> Result<Self, IntelHexError> {
        let Some(hexdigit_part) = line.strip_prefix(':') else {
            return Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::NotStartingWithColon(line.to_owned()),
            ));
        };

        let bytes = hex::decode(hexdigit_part).map_err(|err| {
            IntelHexError::ParseRecordError(match err {
                hex::FromHexError::OddLength => IntelHexErrorKind::OddHexLength(line.to_owned()),
                _ => IntelHexErrorKind::ContainsInvalidCharacters(line.to_owned()),
            })
        })?;

        let length_mismatch = |expected: usize| {
            IntelHexError::ParseRecordError(IntelHexErrorKind::LengthMismatch(
                line.to_owned(),
                expected,
                bytes.len(),
            ))
        };

        let [byte_count, addr_high, addr_low, rtype, rest @ ..] = bytes.as_slice() else {
            return Err(length_mismatch(sizes::HEADER_BYTES + 1));
        };

        // Header, payload and the trailing checksum byte
        let expected_len = sizes::HEADER_BYTES + usize::from(*byte_count) + 1;
        if bytes.len() != expected_len {
            return Err(length_mismatch(expected_len));
        }
        let Some((checksum, data)) = rest.split_last() else {
            return Err(length_mismatch(expected_len));
        };

        let record_type = RecordType::try_from(*rtype).map_err(IntelHexError::ParseRecordError)?;

        Ok(Self {
            byte_count: *byte_count,
            address: u16::from_be_bytes([*addr_high, *addr_low]),
            record_type,
            data: data.to_vec(),
            checksum: *checksum,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":{:02X}{:04X}{:02X}{}{:02X}",
            self.byte_count,
            self.address,
            self.record_type as u8,
            hex::encode_upper(&self.data),
            self.checksum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LARGEST_RECORD;

    /// Returns valid instances of Record
    ///
    fn get_valid_struct_records() -> [Record; 7] {
        [
            Record {
                byte_count: 0x10,
                address: 0xFFF0,
                record_type: RecordType::Data,
                data: vec![
                    0x9B, 0x6D, 0x98, 0x47, 0xA0, 0x68, 0x10, 0xF0, 0x39, 0xFF, 0x06, 0x21, 0xA0,
                    0x68, 0x10, 0xF0,
                ],
                checksum: 0xAB,
            },
            Record {
                byte_count: 0x08,
                address: 0xAEE0,
                record_type: RecordType::Data,
                data: vec![0x7C, 0x53, 0xFF, 0x7F, 0x01, 0x00, 0x00, 0x00],
                checksum: 0x1C,
            },
            Record {
                byte_count: 0x04,
                address: 0xF870,
                record_type: RecordType::Data,
                data: vec![0x00, 0x00, 0x00, 0x00],
                checksum: 0x94,
            },
            Record {
                byte_count: 0x00,
                address: 0x0000,
                record_type: RecordType::EndOfFile,
                data: vec![],
                checksum: 0xFF,
            },
            Record {
                byte_count: 0x02,
                address: 0x0000,
                record_type: RecordType::ExtendedSegmentAddress,
                data: vec![0x12, 0x00],
                checksum: 0xEA,
            },
            Record {
                byte_count: 0x02,
                address: 0x0000,
                record_type: RecordType::ExtendedLinearAddress,
                data: vec![0x00, 0x03],
                checksum: 0xF7,
            },
            Record {
                byte_count: 0x04,
                address: 0x0000,
                record_type: RecordType::BlockStart,
                data: vec![0x99, 0x01, 0xC0, 0xDE],
                checksum: 0xBA,
            },
        ]
    }

    /// Returns valid record strings
    ///
    fn get_valid_str_records() -> [&'static str; 7] {
        [
            ":10FFF0009B6D9847A06810F039FF0621A06810F0AB",
            ":08AEE0007C53FF7F010000001C",
            ":04F870000000000094",
            ":00000001FF",
            ":020000021200EA",
            ":020000040003F7",
            ":0400000A9901C0DEBA",
        ]
    }

    /// Returns invalid record strings and corresponding errors
    ///
    fn get_invalid_str_records() -> [(&'static str, IntelHexErrorKind); 9] {
        [
            // Removed ':' from record str
            (
                "04F870000000000094",
                IntelHexErrorKind::MissingStartCode("04F870000000000094".into()),
            ),
            // One hex digit of the payload missing
            (
                ":04F87000000000094",
                IntelHexErrorKind::OddHexLength(":04F87000000000094".into()),
            ),
            // Extra byte after the checksum
            (
                ":04F87000000000009400",
                IntelHexErrorKind::LengthMismatch(":04F87000000000009400".into(), 9, 10),
            ),
            // Payload shorter than record length byte
            (
                ":100000000000FF",
                IntelHexErrorKind::LengthMismatch(":100000000000FF".into(), 21, 7),
            ),
            // EOF record with fewer chars
            (":0000FF", IntelHexErrorKind::RecordTooShort(":0000FF".into())),
            // Char 'Z' is not a hex digit
            (
                ":0000000ZFF",
                IntelHexErrorKind::ContainsInvalidCharacters(":0000000ZFF".into()),
            ),
            // Gap between standard and custom types
            (":00000006FA", IntelHexErrorKind::InvalidRecordType(0x06)),
            // Past the custom types
            (":0000000FF1", IntelHexErrorKind::InvalidRecordType(0x0F)),
            // Empty line
            ("", IntelHexErrorKind::RecordTooShort(String::new())),
        ]
    }

    #[test]
    fn test_valid_record_type_codes() {
        let cases = [
            (0x00, RecordType::Data),
            (0x01, RecordType::EndOfFile),
            (0x02, RecordType::ExtendedSegmentAddress),
            (0x03, RecordType::StartSegmentAddress),
            (0x04, RecordType::ExtendedLinearAddress),
            (0x05, RecordType::StartLinearAddress),
            (0x0A, RecordType::BlockStart),
            (0x0B, RecordType::BlockEnd),
            (0x0C, RecordType::PaddedData),
            (0x0D, RecordType::CustomData),
            (0x0E, RecordType::OtherData),
        ];
        for (code, rtype) in cases {
            assert!(RecordType::is_valid(code));
            assert_eq!(RecordType::try_from(code), Ok(rtype));
            assert_eq!(rtype as u8, code);
        }
    }

    #[test]
    fn test_invalid_record_type_codes() {
        for code in [0x06, 0x07, 0x08, 0x09, 0x0F, 0x10, 0xAB, 0xFF] {
            assert!(!RecordType::is_valid(code));
            assert_eq!(
                RecordType::try_from(code),
                Err(IntelHexErrorKind::InvalidRecordType(code))
            );
        }
    }

    #[test]
    fn test_custom_record_types() {
        assert!(!RecordType::Data.is_custom());
        assert!(!RecordType::StartLinearAddress.is_custom());
        assert!(RecordType::BlockStart.is_custom());
        assert!(RecordType::OtherData.is_custom());
    }

    #[test]
    fn test_calculate_checksum() {
        for record in get_valid_str_records() {
            // Strip information not used for checksum calculation
            let trimmed_record = &record[1..record.len() - 2];
            let expected_checksum = hex::decode(&record[record.len() - 2..]).unwrap()[0];

            let bytes = hex::decode(trimmed_record).unwrap();

            assert_eq!(expected_checksum, Record::calculate_checksum(&bytes));
        }
    }

    #[test]
    fn test_expected_checksum() {
        for record in get_valid_struct_records() {
            assert_eq!(record.checksum, record.expected_checksum());
            assert!(record.verify_checksum().is_ok());
        }
    }

    #[test]
    fn test_verify_checksum_mismatch() {
        // Checksum wrong - should be 0xF0
        let record = Record::parse(":1000000000000000000000000000000000000000AA").unwrap();
        assert_eq!(
            record.verify_checksum(),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordChecksumMismatch(0xF0, 0xAA)
            ))
        );
    }

    #[test]
    fn test_create_records() {
        let records = get_valid_str_records();
        let expected_records = get_valid_struct_records();
        for (rec_str, rec) in records.iter().zip(expected_records.iter()) {
            let created = Record::create(rec.address as usize, rec.record_type, &rec.data);
            assert_eq!(created.as_deref(), Ok(*rec_str));
        }
    }

    #[test]
    fn test_create_more_data_records() {
        let cases: [(usize, &[u8], &str); 3] = [
            (
                0x4290,
                &[
                    0x64, 0x27, 0x00, 0x20, 0x03, 0x4B, 0x19, 0x60, 0x43, 0x68, 0x03, 0x49, 0x9B,
                    0x00, 0x5A, 0x50,
                ],
                ":1042900064270020034B1960436803499B005A5070",
            ),
            (
                0xE7D4,
                &[0x0C, 0x1A, 0xFF, 0x7F, 0x01, 0x00, 0x00, 0x00],
                ":08E7D4000C1AFF7F0100000098",
            ),
            (0xFFFF, &[], ":00FFFF0002"),
        ];
        for (address, data, expected) in cases {
            assert_eq!(
                Record::create(address, RecordType::Data, data).as_deref(),
                Ok(expected)
            );
        }
    }

    #[test]
    fn test_create_rejects_out_of_range_input() {
        assert_eq!(
            Record::create(0x1_0000, RecordType::Data, &[]),
            Err(IntelHexError::CreateRecordError(
                IntelHexErrorKind::AddressOutOfRange(RecordType::Data, 0x1_0000)
            ))
        );
        assert_eq!(
            Record::create(0, RecordType::PaddedData, &[0xFF; 17]),
            Err(IntelHexError::CreateRecordError(
                IntelHexErrorKind::PayloadTooLarge(RecordType::PaddedData, 17)
            ))
        );
        assert!(Record::create(0, RecordType::Data, &[0xFF; 16]).is_ok());
        assert!(Record::create(0, RecordType::Data, &[]).is_ok());
    }

    #[test]
    fn test_validate_records() {
        for record in get_valid_str_records() {
            assert!(Record::validate(record).is_ok());
        }

        let too_long = format!(":11000000{}EF", "00".repeat(17));
        assert_eq!(
            Record::validate(&too_long),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooLong(too_long.clone())
            ))
        );
        // Exact limits: 43 and 11 characters are accepted
        let longest = format!(":10000000{}F0", "00".repeat(16));
        assert_eq!(longest.len(), LARGEST_RECORD);
        assert!(Record::validate(&longest).is_ok());
        let one_over = format!("{longest}0");
        assert_eq!(
            Record::validate(&one_over),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooLong(one_over.clone())
            ))
        );
        assert_eq!(
            Record::validate(":00000001F"),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooShort(":00000001F".into())
            ))
        );

        // Length is checked before the start code
        assert_eq!(
            Record::validate("0000FF"),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::RecordTooShort("0000FF".into())
            ))
        );
    }

    #[test]
    fn test_record_type_from_record() {
        for line in [
            ":00000001FF",
            ":00000001FF\n",
            ":00000001FF\r\n",
            ":00000001FF\n\r",
        ] {
            assert_eq!(RecordType::from_record(line), Ok(RecordType::EndOfFile));
        }
        assert_eq!(
            RecordType::from_record(":0400000A9901C0DEBA"),
            Ok(RecordType::BlockStart)
        );
        // Checksum and byte count are ignored
        assert_eq!(
            RecordType::from_record(":0100000BFF00"),
            Ok(RecordType::BlockEnd)
        );
        assert_eq!(
            RecordType::from_record(":00000010F0"),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::InvalidRecordType(0x10)
            ))
        );
        assert_eq!(
            RecordType::from_record(":000000+1FF"),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::ContainsInvalidCharacters(":000000+1FF".into())
            ))
        );
    }

    #[test]
    fn test_parse_valid_records() {
        let records = get_valid_str_records();
        let expected_records = get_valid_struct_records();
        for (rec_str, rec) in records.iter().zip(expected_records.iter()) {
            assert_eq!(Record::parse(rec_str).unwrap(), *rec);
            assert_eq!(Record::parse(&rec_str.to_lowercase()).unwrap(), *rec);
            assert_eq!(Record::parse(&format!("{rec_str}\r\n")).unwrap(), *rec);
        }
    }

    #[test]
    fn test_parse_invalid_records() {
        for (record, expected_error) in get_invalid_str_records() {
            assert_eq!(
                Record::parse(record).unwrap_err(),
                IntelHexError::ParseRecordError(expected_error)
            );
        }
    }

    #[test]
    fn test_parse_keeps_wrong_checksum() {
        let record = Record::parse(":0400000A9901C0DE00").unwrap();
        assert_eq!(record.checksum, 0x00);
        assert_eq!(record.expected_checksum(), 0xBA);
    }

    #[test]
    fn test_accessors_match_fields() {
        for record in get_valid_struct_records() {
            assert_eq!(usize::from(record.byte_count()), record.data().len());
            assert_eq!(record.address(), record.address);
            assert_eq!(record.record_type(), record.record_type);
            assert_eq!(record.checksum(), record.checksum);
        }
    }

    #[test]
    fn test_parse_unbounded() {
        let data = [0xA5; 32];
        let mut content = vec![0x20, 0x12, 0x34, 0x00];
        content.extend_from_slice(&data);
        let checksum = Record::calculate_checksum(&content);
        let line = format!(":{}{checksum:02X}", hex::encode_upper(&content));

        // Too long for the bounded decoder
        assert!(matches!(
            Record::parse(&line).unwrap_err().kind(),
            IntelHexErrorKind::RecordTooLong(_)
        ));

        let record = Record::parse_unbounded(&line).unwrap();
        assert_eq!(record.byte_count, 0x20);
        assert_eq!(record.address, 0x1234);
        assert_eq!(record.data, data);
        assert!(record.verify_checksum().is_ok());
        assert_eq!(record.to_string(), line);
    }

    #[test]
    fn test_parse_unbounded_without_colon() {
        assert_eq!(
            Record::parse_unbounded("04F870000000000094"),
            Err(IntelHexError::ParseRecordError(
                IntelHexErrorKind::NotStartingWithColon("04F870000000000094".into())
            ))
        );
        let too_long = format!(":FF000000{}01", "00".repeat(256));
        assert!(matches!(
            Record::parse_unbounded(&too_long).unwrap_err().kind(),
            IntelHexErrorKind::RecordTooLong(_)
        ));
    }

    #[test]
    fn test_display_uses_stored_fields() {
        for rec_str in get_valid_str_records() {
            assert_eq!(Record::parse(rec_str).unwrap().to_string(), rec_str);
        }
        let record = Record::parse(":0400000a9901c0de00").unwrap();
        assert_eq!(record.to_string(), ":0400000A9901C0DE00");
    }
}
