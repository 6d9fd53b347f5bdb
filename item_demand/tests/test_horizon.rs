use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use item_demand::{aggregate, ConfigError, ForecastRecord};
use rstest::rstest;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn single_item_records() -> Vec<ForecastRecord> {
    [10.0, 20.0, 5.0, 0.0, 30.0]
        .iter()
        .enumerate()
        .map(|(i, &estimate)| {
            ForecastRecord::new("i-1", "Margherita", day(i as u32 + 1), estimate)
                .with_upper(estimate * 1.5)
                .with_sale_probability(0.8)
        })
        .collect()
}

#[test]
fn horizons_beyond_record_count_take_the_full_sum() {
    let rows = aggregate(&single_item_records(), &[1, 3, 5, 7]).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item_id, "i-1");
    assert_eq!(rows[0].item_name, "Margherita");
    assert_eq!(rows[0].cumulative, vec![10.0, 35.0, 65.0, 65.0]);
}

#[test]
fn cumulative_values_never_decrease_for_non_negative_estimates() {
    let rows = aggregate(&single_item_records(), &[1, 2, 3, 5, 7, 10, 14]).unwrap();
    let cumulative = &rows[0].cumulative;
    assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn rows_are_sorted_by_case_insensitive_name() {
    let records = vec![
        ForecastRecord::new("i-3", "ziti", day(1), 1.0),
        ForecastRecord::new("i-1", "Antipasto", day(1), 2.0),
        ForecastRecord::new("i-2", "BURRATA", day(1), 3.0),
        ForecastRecord::new("i-4", "burrata special", day(1), 4.0),
    ];

    let rows = aggregate(&records, &[1]).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.item_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Antipasto", "BURRATA", "burrata special", "ziti"]
    );
}

#[test]
fn items_are_rolled_up_independently() {
    let records = vec![
        ForecastRecord::new("i-1", "Margherita", day(1), 10.0),
        ForecastRecord::new("i-2", "Caesar Salad", day(1), 1.0),
        ForecastRecord::new("i-1", "Margherita", day(2), 20.0),
        ForecastRecord::new("i-2", "Caesar Salad", day(2), 2.0),
    ];

    let rows = aggregate(&records, &[1, 2]).unwrap();
    assert_eq!(rows[0].item_name, "Caesar Salad");
    assert_eq!(rows[0].cumulative, vec![1.0, 3.0]);
    assert_eq!(rows[1].item_name, "Margherita");
    assert_eq!(rows[1].cumulative, vec![10.0, 30.0]);
}

#[test]
fn fractional_estimates_accumulate_in_date_order() {
    let records = vec![
        ForecastRecord::new("i-1", "Margherita", day(1), 0.1),
        ForecastRecord::new("i-1", "Margherita", day(2), 0.2),
        ForecastRecord::new("i-1", "Margherita", day(3), 0.3),
    ];

    let rows = aggregate(&records, &[3]).unwrap();
    assert_approx_eq!(rows[0].cumulative[0], 0.6, 1e-12);
}

#[rstest]
#[case(&[1, 1, 3])]
#[case(&[7, 2, 7])]
fn duplicate_horizons_are_a_config_error(#[case] horizons: &[usize]) {
    let err = aggregate(&single_item_records(), horizons).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateHorizon { .. }));
}

#[test]
fn zero_horizon_is_a_config_error() {
    let err = aggregate(&single_item_records(), &[0, 1]).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveHorizon { value: 0 });
}
