//! # hastycsv
//!
//! A fast, simple, and NOT RFC 4180 compliant reader for delimited text.
//!
//! Fields are separated by a single delimiter byte and records by line
//! breaks. There is no quoting and no escaping, which keeps the hot loop down
//! to a byte search per field. The field count is inferred from the first
//! line, and one line buffer plus one span table are reused for every record.
//!
//! Records are handed to a callback as borrowed [`Record`]s. Numeric
//! accessors on [`Field`] return 0 on bad input and report the first failure
//! once the callback returns, so a whole record can be processed without
//! checking each conversion.
//!
//! ```
//! use hastycsv::Reader;
//!
//! let input = "bill|30|154.5\nmary|35|125.1";
//! let mut ages = Vec::new();
//!
//! Reader::with_delimiter(b'|').read(input.as_bytes(), |_, record| {
//!     ages.push(record.field(1).as_u32());
//!     Ok(())
//! })?;
//!
//! assert_eq!(ages, [30, 35]);
//! # Ok::<(), hastycsv::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod io;
pub mod number;
pub mod parser;
pub mod reader;

pub use error::{Abort, Error, Result};
pub use field::{Field, Record};
pub use io::{read_file, DEFAULT_BUFFER_SIZE};
pub use number::{parse_f32, parse_u32};
pub use reader::{Reader, DEFAULT_DELIMITER};
