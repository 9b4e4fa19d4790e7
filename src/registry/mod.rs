//! External data sources for the household registry
//!
//! Each source maps rows of an external tabular export onto domain models,
//! tolerating bad rows instead of failing the batch.
//!
//! Available sources:
//! - Sheet: the village master sheet (CSV export of the shared spreadsheet)

pub mod sheet;

pub use sheet::{SheetBatch, read_sheet, read_sheet_file};
