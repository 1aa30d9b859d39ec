/// Renders a non-negative amount with thousands separators and two decimal
/// places, e.g. `50000.0` becomes `"50,000.00"`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.max(0.0));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped: Vec<char> = Vec::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.into_iter().rev().collect();

    format!("{int_grouped}.{frac_part}")
}
