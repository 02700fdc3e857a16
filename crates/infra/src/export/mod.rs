//! Calendar file output

pub mod ics_file;

pub use ics_file::write_ics;
