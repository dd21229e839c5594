/// Group a whole-dollar amount with thousands separators
fn group_thousands(dollars: u64) -> String {
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents (e.g., $1,234,568)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    let dollars_formatted = group_thousands(dollars);

    if value >= 0.0 {
        format!("${}", dollars_formatted)
    } else {
        format!("-${}", dollars_formatted)
    }
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a value already expressed in percent (e.g., 62.3 -> "62%")
pub fn format_percentage(value_pct: f64) -> String {
    format!("{:.0}%", value_pct)
}

/// Format a number of years with one decimal
pub fn format_years(years: f64) -> String {
    format!("{:.1} yrs", years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(0.0), "$0");
        assert_eq!(format_currency_short(999.4), "$999");
        assert_eq!(format_currency_short(969_608.0), "$969,608");
        assert_eq!(format_currency_short(1_500_000.0), "$1,500,000");
        assert_eq!(format_currency_short(-12_345.6), "-$12,346");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(50.0), "$50");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(-3_000.0), "-$3K");
    }

    #[test]
    fn test_format_percentage_and_years() {
        assert_eq!(format_percentage(18.2), "18%");
        assert_eq!(format_percentage(100.0), "100%");
        assert_eq!(format_years(6.0), "6.0 yrs");
        assert_eq!(format_years(2.35), "2.4 yrs");
    }
}
