//! Configuration for sheet import.

/// Assessment year assumed when a caller does not specify one
pub const DEFAULT_ASSESSMENT_YEAR: i32 = 2026;

/// Configuration for reading a master-sheet CSV
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Assessment year assigned to every imported row
    pub year: i32,
    /// Whether the first row is a header to skip
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_ASSESSMENT_YEAR,
            has_header: true,
            delimiter: b',',
        }
    }
}

impl SheetConfig {
    /// Configuration for a specific assessment year
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }
}
