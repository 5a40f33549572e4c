//! The `fatbin` module provides constructors for the records that make up a fat binary:
//! a single hex stream packing several firmware images, each one enclosed by custom
//! Block Start and Block End records and padded to a fixed block size.
//!
//! All of them go through [`Record::create`] and fail the same way it does.

use crate::error::{IntelHexError, IntelHexErrorKind};
use crate::record::{Record, RecordType, sizes};

/// Suffix appended to the board ID of every Block Start record.
const BLOCK_START_MAGIC: [u8; 2] = [0xC0, 0xDE];
/// Filler byte of Block End and Padded Data payloads.
const PADDING_BYTE: u8 = 0xFF;
const LARGEST_LINEAR_ADDRESS: usize = 0xFFFF_FFFF;

/// Creates an End Of File record. It never varies.
///
/// # Example
/// ```
/// assert_eq!(ihexrec::end_of_file_record(), ":00000001FF");
/// ```
#[must_use]
pub const fn end_of_file_record() -> &'static str {
    ":00000001FF"
}

/// Creates an Extended Linear Address record from a full 32 bit address.
/// Only the upper 16 bits end up in the record.
///
/// # Errors
/// Returns an error if the address does not fit into 32 bits.
///
/// # Example
/// ```
/// use ihexrec::ext_lin_address_record;
///
/// assert_eq!(ext_lin_address_record(0x1_0000).unwrap(), ":020000040001F9");
/// assert_eq!(ext_lin_address_record(0x4321).unwrap(), ":020000040000FA");
/// ```
pub fn ext_lin_address_record(address: usize) -> Result<String, IntelHexError> {
    if address > LARGEST_LINEAR_ADDRESS {
        return Err(IntelHexError::CreateRecordError(
            IntelHexErrorKind::AddressOutOfRange(RecordType::ExtendedLinearAddress, address),
        ));
    }
    #[allow(clippy::cast_possible_truncation)]
    let upper = [(address >> 24) as u8, (address >> 16) as u8];
    Record::create(0, RecordType::ExtendedLinearAddress, &upper)
}

/// Creates a Block Start (custom) record carrying the board ID.
///
/// # Errors
/// Returns an error if the board ID does not fit into 16 bits.
///
/// # Example
/// ```
/// assert_eq!(ihexrec::block_start_record(0x9901).unwrap(), ":0400000A9901C0DEBA");
/// ```
pub fn block_start_record(board_id: usize) -> Result<String, IntelHexError> {
    let Ok(board_id16) = u16::try_from(board_id) else {
        return Err(IntelHexError::CreateRecordError(
            IntelHexErrorKind::BoardIdOutOfRange(board_id),
        ));
    };
    let [id_high, id_low] = board_id16.to_be_bytes();
    let [magic_high, magic_low] = BLOCK_START_MAGIC;
    Record::create(
        0,
        RecordType::BlockStart,
        &[id_high, id_low, magic_high, magic_low],
    )
}

/// Creates a Block End (custom) record. The payload is ignored by the reader and
/// holds `pad_bytes_len` filler bytes.
///
/// # Errors
/// Returns an error if `pad_bytes_len` exceeds [`record_padding_capacity`].
///
/// # Example
/// ```
/// assert_eq!(ihexrec::block_end_record(1).unwrap(), ":0100000BFFF5");
/// ```
pub fn block_end_record(pad_bytes_len: usize) -> Result<String, IntelHexError> {
    padding_record(RecordType::BlockEnd, pad_bytes_len)
}

/// Creates a Padded Data (custom) record, used to fill a block up to its fixed size
/// (e.g. 512 bytes) with data the reader skips.
///
/// # Errors
/// Returns an error if `pad_bytes_len` exceeds [`record_padding_capacity`].
pub fn padded_data_record(pad_bytes_len: usize) -> Result<String, IntelHexError> {
    padding_record(RecordType::PaddedData, pad_bytes_len)
}

fn padding_record(record_type: RecordType, pad_bytes_len: usize) -> Result<String, IntelHexError> {
    // Length is checked by Record::create
    let data = vec![PADDING_BYTE; pad_bytes_len];
    Record::create(0, record_type, &data)
}

/// Number of padding bytes that fit into a single Block End or Padded Data record.
#[must_use]
pub const fn record_padding_capacity() -> usize {
    sizes::MAX_DATA_BYTES
}

/// Re-tags a record as Custom Data. Address and data are kept, the checksum follows
/// the new type.
///
/// # Errors
/// Returns an error if the record cannot be parsed.
///
/// # Example
/// ```
/// use ihexrec::convert_record_to_custom_data;
///
/// let custom = convert_record_to_custom_data(":105D3000E060E3802046FFF765FF0123A1881A4653");
/// assert_eq!(custom.unwrap(), ":105D300DE060E3802046FFF765FF0123A1881A4646");
/// ```
pub fn convert_record_to_custom_data(line: &str) -> Result<String, IntelHexError> {
    let record = Record::parse(line)?;
    tracing::trace!(
        address = record.address,
        from = ?record.record_type,
        "converting record to custom data"
    );
    Record::create(
        usize::from(record.address),
        RecordType::CustomData,
        &record.data,
    )
}
