use super::{Dataset, Scalar};
use chrono::{Duration, NaiveDate, NaiveTime};

/// Small product sales dataset used by the demo binary and benches
pub fn sample_dataset() -> Dataset {
    let text = |values: &[&str]| values.iter().map(|v| Scalar::from(*v)).collect::<Vec<_>>();
    let ints = |values: &[i64]| values.iter().map(|v| Scalar::Int(*v)).collect::<Vec<_>>();

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).map(|d| d.and_time(NaiveTime::MIN));
    let dates = (0..8)
        .map(|day| Scalar::from(start.map(|s| s + Duration::days(day))))
        .collect();

    let columns = vec![
        ("product", text(&["A", "B", "C", "D", "E", "A", "B", "C"])),
        ("sales", ints(&[100, 150, 200, 80, 120, 90, 140, 180])),
        ("profit", ints(&[20, 30, 45, 15, 25, 18, 28, 38])),
        (
            "region",
            text(&["North", "South", "East", "West", "North", "South", "East", "West"]),
        ),
        ("date", dates),
    ];

    // Column names are distinct and every column has eight values
    Dataset::from_columns(columns).unwrap_or_default()
}
