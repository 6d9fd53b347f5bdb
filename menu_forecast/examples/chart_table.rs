//! Build and print a reconciled chart table from sample feed payloads.
//!
//! Run with: cargo run --example chart_table

use menu_forecast::adapt::{history_series, model_series, Metric};
use menu_forecast::dashboard::chart_table;
use menu_forecast::feed::{HistoryDay, ModelDay};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let history = vec![
        HistoryDay {
            date: "2024-06-01".to_string(),
            revenue: 1040.0,
            orders: 87.0,
            temp_max: Some(21.0),
            rain_category: Some("light".to_string()),
        },
        HistoryDay {
            date: "2024-06-02".to_string(),
            revenue: 1190.0,
            orders: 95.0,
            temp_max: Some(24.0),
            rain_category: Some("none".to_string()),
        },
    ];

    let prophet = vec![
        ModelDay {
            date: "2024-06-03".to_string(),
            revenue: 1255.0,
            orders: 101.0,
            temp_max: Some(27.0),
            rain_category: Some("none".to_string()),
            lower: None,
            upper: None,
        },
        ModelDay {
            date: "2024-06-04".to_string(),
            revenue: 1310.0,
            orders: 104.0,
            temp_max: Some(29.0),
            rain_category: Some("none".to_string()),
            lower: None,
            upper: None,
        },
    ];

    let gp = vec![ModelDay {
        date: "2024-06-03".to_string(),
        revenue: 1230.0,
        orders: 99.0,
        temp_max: None,
        rain_category: None,
        lower: Some(1150.0),
        upper: Some(1320.0),
    }];

    let mut series = vec![history_series(&history, Metric::Revenue)];
    series.extend(model_series("prophet", &prophet, Metric::Revenue));
    series.extend(model_series("gp", &gp, Metric::Revenue));

    let table = chart_table(&series)?;

    println!("{} rows, {} rejected points", table.rows.len(), table.rejected.len());
    for row in &table.rows {
        println!("{}:", row.date);
        for (field, value) in &row.fields {
            println!("  {field} = {value:?}");
        }
    }

    Ok(())
}
