//! Unit tests for kline periods

use wavetag::models::KlinePeriod;

#[test]
fn test_period_labels() {
    assert_eq!(KlinePeriod::Min60.label(), "KL_60");
    assert_eq!(KlinePeriod::Min30.kline_type(), "K_30M");
    assert_eq!(KlinePeriod::Min15.kline_type(), "K_15M");
    assert_eq!(KlinePeriod::Min60.to_string(), "KL_60");
}

#[test]
fn test_period_parse_accepts_all_label_forms() {
    assert_eq!("KL_60".parse::<KlinePeriod>().unwrap(), KlinePeriod::Min60);
    assert_eq!("K_30M".parse::<KlinePeriod>().unwrap(), KlinePeriod::Min30);
    assert_eq!("15m".parse::<KlinePeriod>().unwrap(), KlinePeriod::Min15);
    assert_eq!(" 60 ".parse::<KlinePeriod>().unwrap(), KlinePeriod::Min60);
    assert!("5m".parse::<KlinePeriod>().is_err());
    assert!("daily".parse::<KlinePeriod>().is_err());
}

#[test]
fn test_file_name() {
    assert_eq!(
        KlinePeriod::Min60.file_name("SZ.002405"),
        "SZ.002405_K_60M.csv"
    );
}
