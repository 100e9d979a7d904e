/// Per-period chart colors.
///
/// Configuration handed to the sinks; the engine knows nothing about
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodPalette {
    pub first: String,
    pub second: String,
}

impl Default for PeriodPalette {
    fn default() -> Self {
        Self {
            first: String::from("#000000"),
            second: String::from("#40B4A6"),
        }
    }
}
