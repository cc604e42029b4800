/// A single upstream calendar entry that passed the date, currency and
/// impact filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomicEvent {
    /// Display time as published upstream, or "N/A" when the cell is missing
    pub time: String,
    /// Event name, or "Unknown" when the cell is missing
    pub name: String,
}
