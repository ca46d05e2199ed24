use super::*;

#[test]
fn format_salary_groups_thousands() {
    assert_eq!(format_salary(85_000.0), "$85,000");
    assert_eq!(format_salary(1_250_000.0), "$1,250,000");
}

#[test]
fn format_salary_small_values_have_no_separator() {
    assert_eq!(format_salary(0.0), "$0");
    assert_eq!(format_salary(999.0), "$999");
}

#[test]
fn format_salary_keeps_significant_fraction() {
    assert_eq!(format_salary(1234.5), "$1,234.5");
    assert_eq!(format_salary(1234.567), "$1,234.57");
}
