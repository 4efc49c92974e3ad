/// Converts an amount into the base currency with a rate expressed as
/// base units per source unit.
pub fn to_base(amount: f64, rate: f64) -> f64 {
    amount * rate
}

pub fn round_to_cents(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
