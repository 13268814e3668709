//! Token-prefix index over underscore-delimited names

mod error;
mod index;
mod io;
mod record;

pub use error::{IndexError, ParseRecordError, Result};
pub use index::{Index, LoadReport, MalformedPolicy, SkippedLine};
pub use io::atomic_write;
pub use record::{tokenize, Record, TOKEN_DELIMITER};
