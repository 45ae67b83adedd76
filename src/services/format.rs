/// Groups an integer count with thousands separators: 12847 -> "12,847".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thousands grouping for counts that arrive as floats (pandas describe
/// emits 12847.0). Negative or non-finite values print plainly.
pub fn thousands_f(x: f64) -> String {
    if !x.is_finite() || x < 0.0 {
        return format!("{x:.0}");
    }
    thousands(x.round() as u64)
}

pub fn fixed(x: f64, places: usize) -> String {
    format!("{x:.places$}")
}

/// Twenty-cell meter for a 0-100 percentage, clamped at both ends.
pub fn meter(pct: f64) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = (clamped / 5.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

pub fn strength_desc(r: f64) -> &'static str {
    let abs_r = r.abs();
    if abs_r < 0.1 {
        "negligible"
    } else if abs_r < 0.3 {
        "weak"
    } else if abs_r < 0.5 {
        "moderate"
    } else if abs_r < 0.7 {
        "strong"
    } else {
        "very strong"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(12847), "12,847");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn float_counts_round_before_grouping() {
        assert_eq!(thousands_f(12847.0), "12,847");
        assert_eq!(thousands_f(999.6), "1,000");
        assert_eq!(thousands_f(-3.0), "-3");
    }

    #[test]
    fn meter_clamps_and_scales() {
        assert_eq!(meter(0.0), "[--------------------]");
        assert_eq!(meter(100.0), "[####################]");
        assert_eq!(meter(186.2), "[####################]");
        assert_eq!(meter(50.0), "[##########----------]");
    }

    #[test]
    fn strength_wording_matches_pearson_bands() {
        assert_eq!(strength_desc(0.05), "negligible");
        assert_eq!(strength_desc(-0.21), "weak");
        assert_eq!(strength_desc(0.44), "moderate");
        assert_eq!(strength_desc(0.69), "strong");
        assert_eq!(strength_desc(-0.9), "very strong");
    }
}
