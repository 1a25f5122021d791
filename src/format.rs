//! Number-to-text rules for the live widgets.

/// `22.0` renders as `"22°C"`, `21.5` as `"21.5°C"`.
pub fn temperature(celsius: f64) -> String {
    format!("{}°C", celsius)
}

pub fn wind_speed(meters_per_second: f64) -> String {
    format!("{}m/s", meters_per_second)
}

/// Signed 24h change with exactly one decimal. Only strictly positive
/// values get a forced `+`; negatives keep their own sign.
pub fn percent_change(change: f64) -> String {
    let change = round_half_up(change, 1);
    if change > 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

/// USD amount with thousands separators and at most three decimals,
/// trailing zeros dropped: `43250.0` -> `"$43,250"`, `0.62` -> `"$0.62"`.
pub fn usd_grouped(amount: f64) -> String {
    let amount = round_half_up(amount, 3);
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 4);
    if amount < 0.0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// USD amount in whole thousands: `43250.0` -> `"$43k"`.
pub fn usd_thousands(amount: f64) -> String {
    format!("${:.0}k", round_half_up(amount / 1000.0, 0))
}

pub fn usd_fixed(amount: f64, decimals: usize) -> String {
    format!("${:.*}", decimals, round_half_up(amount, decimals))
}

/// Rounds to `decimals` places with ties going away from zero: `0.25`
/// becomes `0.3`, `42.5` becomes `43`.
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    normalize_zero((value * scale).round() / scale)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// -0.0 would otherwise render as "-0.0"
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_strings() {
        assert_eq!(temperature(22.0), "22°C");
        assert_eq!(temperature(24.5), "24.5°C");
        assert_eq!(temperature(-3.0), "-3°C");
        assert_eq!(wind_speed(3.5), "3.5m/s");
        assert_eq!(wind_speed(4.0), "4m/s");
    }

    #[test]
    fn test_percent_change_sign() {
        assert_eq!(percent_change(2.5), "+2.5%");
        assert_eq!(percent_change(3.8), "+3.8%");
        assert_eq!(percent_change(-1.24), "-1.2%");
        assert_eq!(percent_change(-4.0), "-4.0%");
        assert_eq!(percent_change(0.0), "0.0%");
        assert_eq!(percent_change(-0.0), "0.0%");
        assert_eq!(percent_change(-0.04), "0.0%");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(percent_change(0.25), "+0.3%");
        assert_eq!(percent_change(2.25), "+2.3%");
        assert_eq!(percent_change(-0.25), "-0.3%");
        assert_eq!(usd_thousands(42500.0), "$43k");
        assert_eq!(usd_fixed(0.0625, 3), "$0.063");
        assert_eq!(usd_grouped(1.0625), "$1.063");
    }

    #[test]
    fn test_usd_grouped() {
        assert_eq!(usd_grouped(43250.0), "$43,250");
        assert_eq!(usd_grouped(1234567.891), "$1,234,567.891");
        assert_eq!(usd_grouped(0.62), "$0.62");
        assert_eq!(usd_grouped(999.0), "$999");
        assert_eq!(usd_grouped(1000.5), "$1,000.5");
        assert_eq!(usd_grouped(-2500.0), "-$2,500");
    }

    #[test]
    fn test_usd_short_forms() {
        assert_eq!(usd_thousands(43250.0), "$43k");
        assert_eq!(usd_thousands(600.0), "$1k");
        assert_eq!(usd_fixed(0.62, 3), "$0.620");
        assert_eq!(usd_fixed(1.0, 2), "$1.00");
    }
}
