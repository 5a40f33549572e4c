//! # `ihexrec`
//!
//! `ihexrec` is a Rust library for creating and parsing single Intel HEX records,
//! including the custom record types used to pack several firmware images into one
//! hex stream ("fat binaries").
//!
//! The library provides:
//! - Record encoder, decoder and validator (via [`Record`] struct).
//! - Standard and custom record types (via [`RecordType`] enum).
//! - Constructors for the records of a fat binary (e.g. [`block_start_record`]).
//! - Error handling with [`IntelHexError`].
//!
//! ## Example
//!
//! ```
//! use ihexrec::{Record, RecordType};
//!
//! let line = Record::create(0x4290, RecordType::Data, &[0xDE, 0xAD]).unwrap();
//! let record = Record::parse(&line).unwrap();
//!
//! assert_eq!(record.address(), 0x4290);
//! assert_eq!(record.data(), [0xDE, 0xAD]);
//! assert!(record.verify_checksum().is_ok());
//! ```

mod error;
mod fatbin;
mod record;
mod stream;

// Public APIs
pub use error::{IntelHexError, IntelHexErrorKind};
pub use fatbin::{
    block_end_record, block_start_record, convert_record_to_custom_data, end_of_file_record,
    ext_lin_address_record, padded_data_record, record_padding_capacity,
};
pub use record::sizes::{
    LARGEST_RECORD, LARGEST_UNBOUNDED_RECORD, MAX_DATA_BYTES, SMALLEST_RECORD,
};
pub use record::{Record, RecordType};
pub use stream::{ihex_to_record_strs, parse_records};

