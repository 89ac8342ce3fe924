//! Tests for the freeform label extractor and its tabular fallback

use chrono::Utc;

use super::super::freeform::parse;
use super::{assert_close, utc_millis};

#[test]
fn test_labeled_fields_metric() {
    let feed = "Station: 45161\n\
                Date: 2023-06-01\n\
                Water temperature: 14.5C\n\
                Wave height: 1.2m\n";
    let obs = parse(feed).unwrap();

    assert_close(obs.sst_c.unwrap(), 14.5);
    assert_close(obs.wave_m.unwrap(), 1.2);
    assert_eq!(obs.ts, utc_millis(2023, 6, 1, 0, 0));
}

#[test]
fn test_fahrenheit_conversion() {
    let obs = parse("water temperature: 68F\n").unwrap();
    assert_close(obs.sst_c.unwrap(), 20.0);
    assert_eq!(obs.wave_m, None);
}

#[test]
fn test_feet_conversion() {
    let obs = parse("wave height: 3ft\n").unwrap();
    assert_close(obs.wave_m.unwrap(), 0.9144);
    assert_eq!(obs.sst_c, None);
}

#[test]
fn test_unlabeled_unit_defaults_to_metric() {
    let obs = parse("water temperature: 14.5\nwave height: 1.2\n").unwrap();
    assert_close(obs.sst_c.unwrap(), 14.5);
    assert_close(obs.wave_m.unwrap(), 1.2);
}

#[test]
fn test_label_separator_variants() {
    let obs = parse("WATER_TEMPERATURE 15.0\nWAVE_HEIGHT 2.0 m\n").unwrap();
    assert_close(obs.sst_c.unwrap(), 15.0);
    assert_close(obs.wave_m.unwrap(), 2.0);
}

#[test]
fn test_last_label_match_wins() {
    // Every line is scanned; a later restatement overrides the earlier one
    let feed = "water temperature: 14.0C\n\
                wave height: 1.0m\n\
                water temperature: 15.5C\n";
    let obs = parse(feed).unwrap();

    assert_close(obs.sst_c.unwrap(), 15.5);
    assert_close(obs.wave_m.unwrap(), 1.0);
}

#[test]
fn test_unparseable_value_is_skipped() {
    // The number class admits sign runs that fail float parsing
    let obs = parse("water temperature: +-\nwave height: 1.2m\n").unwrap();
    assert_eq!(obs.sst_c, None);
    assert_close(obs.wave_m.unwrap(), 1.2);
}

#[test]
fn test_date_label_without_measurement_is_not_enough() {
    assert!(parse("date: 2023-06-01\n").is_none());
}

#[test]
fn test_no_date_label_defaults_to_now() {
    let before = Utc::now().timestamp_millis();
    let obs = parse("wave height: 1.2m\n").unwrap();
    let after = Utc::now().timestamp_millis();

    assert!(obs.ts >= before && obs.ts <= after);
}

#[test]
fn test_labeled_result_skips_tabular_fallback() {
    // The labeled wave height wins even though a tabular body follows
    let feed = "wave height: 1.2m\n\
                #YY MM DD hh mm WVHT WTMP\n\
                23 01 15 12 00 9.90 25.00\n";
    let obs = parse(feed).unwrap();

    assert_close(obs.wave_m.unwrap(), 1.2);
    assert_eq!(obs.sst_c, None);
}

#[test]
fn test_tabular_fallback_recovers_wave_height_only() {
    let feed = "#YY MM DD hh mm WVHT WTMP\n23 01 15 12 00 1.20 14.50\n";
    let obs = parse(feed).unwrap();

    // The fallback path resolves only the wave-height column; temperature
    // stays unfilled even though its column is resolvable
    assert_eq!(obs.wave_m, Some(1.20));
    assert_eq!(obs.sst_c, None);
    assert_eq!(obs.ts, utc_millis(2023, 1, 15, 12, 0));
}

#[test]
fn test_tabular_fallback_positional() {
    let feed = "#YY MM DD hh mm TIDE\n23 01 15 12 00 2.75\n";
    let obs = parse(feed).unwrap();

    assert_eq!(obs.wave_m, Some(2.75));
    assert_eq!(obs.sst_c, None);
}

#[test]
fn test_tabular_fallback_honors_sentinel() {
    let feed = "#YY MM DD hh mm WVHT\n\
                23 01 15 11 00 1.10\n\
                23 01 15 12 00 MM\n";
    let obs = parse(feed).unwrap();

    assert_eq!(obs.wave_m, Some(1.10));
    assert_eq!(obs.ts, utc_millis(2023, 1, 15, 11, 0));
}

#[test]
fn test_absence_signal() {
    assert!(parse("").is_none());
    assert!(parse("   \n\t\n").is_none());
    assert!(parse("no labels and no digits\n").is_none());
}
