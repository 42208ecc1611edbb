/// Decimal places for derived percentages and averages.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 1;

/// Months covered by the payment summary trend, current month included.
pub const TREND_MONTHS: u32 = 6;

/// Actor label recorded on audit entries. There is no identity system;
/// callers may override it per service instance.
pub const DEFAULT_ACTOR: &str = "管理者";
