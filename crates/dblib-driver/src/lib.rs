//! SQL Server platform adapter over the FreeTDS dblib transport.
//!
//! The driver facade ties together the dialect ([`dblib_dialect`]), the
//! schema introspection layer (re-exported as [`schema`]), and the value
//! codecs (re-exported as [`types`]), and adds the pieces specific to a
//! live connection:
//! connection-string rendering and a transaction session that works
//! around the transport's quirks (option resets at transaction
//! boundaries, no savepoints).
//!
//! # Example
//!
//! ```
//! use dblib_driver::{ConnectionConfig, DblibDriver, DsnFlavor};
//!
//! let driver = DblibDriver::new(
//!     ConnectionConfig::new()
//!         .host("db.example.com")
//!         .port(1433)
//!         .database("app"),
//! );
//! assert_eq!(driver.name(), "pdo_dblib");
//! assert_eq!(
//!     driver.dsn(),
//!     "dblib:host=db.example.com;port=1433;dbname=app;"
//! );
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod driver;
mod error;
mod session;

pub use dblib_schema as schema;
pub use dblib_types as types;

pub use config::{ConnectionConfig, DsnFlavor};
pub use driver::DblibDriver;
pub use error::{DriverError, Result};
pub use session::{Session, StatementExecutor, SESSION_SETTINGS};
