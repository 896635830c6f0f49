//! Rounding and baht formatting

/// Currency symbol used in every rendered amount
pub const CURRENCY_SYMBOL: &str = "฿";

/// Round to the nearest multiple of `step`, ties away from zero
pub fn round_to_step(value: u64, step: u64) -> u64 {
    scale_to_step(value, 100, step)
}

/// Round `value * percent / 100` to the nearest multiple of `step`, ties away
/// from zero. Integer-only, so 0.75 and 1.25 factors never drift.
pub fn scale_to_step(value: u64, percent: u32, step: u64) -> u64 {
    if step == 0 {
        return value.saturating_mul(percent as u64) / 100;
    }
    let numerator = value as u128 * percent as u128;
    let unit = 100u128 * step as u128;
    let steps = (2 * numerator + unit) / (2 * unit);
    let rounded = steps * step as u128;
    rounded.min(u64::MAX as u128) as u64
}

/// Thousands-grouped whole number: 1750000 -> "1,750,000"
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-baht amount with symbol: 1400.0 -> "฿1,400"
pub fn format_baht(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let rounded = amount.abs().round() as u64;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, format_grouped(rounded))
}

/// Integer amount with symbol
pub fn format_baht_whole(amount: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_step() {
        assert_eq!(round_to_step(1_770_000, 50_000), 1_750_000);
        assert_eq!(round_to_step(2_070_000, 50_000), 2_050_000);
        assert_eq!(round_to_step(325_000, 50_000), 350_000);
        assert_eq!(round_to_step(24_999, 50_000), 0);
        assert_eq!(round_to_step(0, 50_000), 0);
    }

    #[test]
    fn test_scale_to_step() {
        // 1,312,500 -> 1,300,000 and 2,187,500 -> 2,200,000
        assert_eq!(scale_to_step(1_750_000, 75, 50_000), 1_300_000);
        assert_eq!(scale_to_step(1_750_000, 100, 50_000), 1_750_000);
        assert_eq!(scale_to_step(1_750_000, 125, 50_000), 2_200_000);
        // 225,000 is exactly half a step: rounds up
        assert_eq!(scale_to_step(300_000, 75, 50_000), 250_000);
        assert_eq!(scale_to_step(300_000, 125, 50_000), 400_000);
    }

    #[test]
    fn test_scale_to_step_saturates() {
        assert_eq!(scale_to_step(u64::MAX, 125, 50_000), u64::MAX);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(1_750_000), "1,750,000");
        assert_eq!(format_grouped(12_345_678), "12,345,678");
    }

    #[test]
    fn test_format_baht() {
        assert_eq!(format_baht(1_400.0), "฿1,400");
        assert_eq!(format_baht(450.05), "฿450");
        assert_eq!(format_baht(2_699.5), "฿2,700");
        assert_eq!(format_baht(f64::NAN), "—");
        assert_eq!(format_baht_whole(1_000_000), "฿1,000,000");
    }
}
