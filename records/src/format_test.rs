use super::*;

#[test]
fn naira_amount_has_symbol_and_grouping() {
    assert_eq!(format_money(10_000, "NGN"), "\u{20a6}10,000");
    assert_eq!(format_money(1_234_567, "NGN"), "\u{20a6}1,234,567");
}

#[test]
fn small_amounts_are_not_grouped() {
    assert_eq!(format_money(0, "USD"), "$0");
    assert_eq!(format_money(999, "GBP"), "\u{a3}999");
}

#[test]
fn unknown_currency_prefixes_code() {
    assert_eq!(format_money(1500, "EUR"), "EUR 1,500");
}

#[test]
fn timestamp_matches_table_format() {
    assert_eq!(format_timestamp(1_688_342_400_000), "Jul 03, 2023 12:00 AM");
    assert_eq!(format_timestamp(1_580_256_000_000), "Jan 29, 2020 12:00 AM");
}

#[test]
fn afternoon_uses_pm() {
    // 2024-10-09 13:05 UTC
    assert_eq!(format_timestamp(1_728_479_100_000), "Oct 09, 2024 01:05 PM");
}

#[test]
fn missing_timestamp_reads_never() {
    assert_eq!(format_optional_timestamp(None), "Never");
    assert_eq!(format_optional_timestamp(Some(1_727_308_800_000)), "Sep 26, 2024 12:00 AM");
}
