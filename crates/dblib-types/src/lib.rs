//! Value codecs for the dblib SQL Server adapter.
//!
//! Converts between Rust values and the text forms the dblib transport
//! carries: geographic points as well-known text, GUID columns in the
//! hyphenated `UNIQUEIDENTIFIER` form, and datetimes matching
//! `DATETIME2(6)` columns.
//!
//! # Example
//!
//! ```
//! use dblib_types::Point;
//!
//! let point = Point::new(48.8584, 2.2945);
//! assert_eq!(point.to_storage(), "POINT(2.2945 48.8584)");
//! assert_eq!(Point::from_storage("POINT(2.2945 48.8584)")?, point);
//! # Ok::<(), dblib_types::CodecError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod datetime;
mod error;
mod guid;
mod point;

pub use datetime::{datetime_from_storage, datetime_to_storage};
pub use error::{CodecError, Result};
pub use guid::{guid_from_storage, guid_to_storage};
pub use point::Point;
