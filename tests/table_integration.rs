//! End-to-end table workflows: import, query, export and entity mapping

use chet::ext::{IterExt, NumericAggregate};
use chet::table::DataTable;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tempfile::TempDir;

const ORDERS: &str = "\
Order,Customer,City,Amount,Shipped
1001,Ann,Paris,120.5,true
1002,Ben,Lyon,,false
1003,Cleo,Paris,80,true
1004,Dan,,200,
1005,Eve,Lyon,42.25,true
";

#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
struct Order {
    id: i64,
    customer: String,
    #[serde(default)]
    amount: f64,
}

#[test]
fn test_filter_sort_and_map() {
    let table = DataTable::from_csv_reader("orders", ORDERS.as_bytes()).unwrap();
    assert_eq!(table.row_count(), 5);

    let shipped = table
        .filter("Shipped = true AND City IN ('Paris', 'Lyon')")
        .sort("Amount DESC");
    let orders: Vec<Order> = shipped.map_to_entities(&[
        ("Order", "id"),
        ("Customer", "customer"),
        ("Amount", "amount"),
    ]);
    assert_eq!(
        orders,
        vec![
            Order { id: 1001, customer: "Ann".into(), amount: 120.5 },
            Order { id: 1003, customer: "Cleo".into(), amount: 80.0 },
            Order { id: 1005, customer: "Eve".into(), amount: 42.25 },
        ]
    );

    let amounts: Vec<f64> = orders.iter().map(|o| o.amount).collect();
    assert_eq!(amounts.as_slice().sum_or_zero(), 242.75);
}

#[test]
fn test_invalid_filter_returns_copy() {
    let table = DataTable::from_csv_reader("orders", ORDERS.as_bytes()).unwrap();
    let same = table.filter("Amount >>> 3");
    assert_eq!(same, table);
    assert!(table.try_filter("Nope = 1").is_err());
}

#[test]
fn test_fill_missing_and_export() {
    let temp_dir = TempDir::new().unwrap();
    let mut table = DataTable::from_csv_reader("orders", ORDERS.as_bytes()).unwrap();
    table.fill_missing_values();
    assert_eq!(table.value(1, "Amount"), Some(&json!(80)));
    assert_eq!(table.value(3, "City"), Some(&json!("Lyon")));
    assert_eq!(table.value(3, "Shipped"), Some(&json!(true)));

    let path = temp_dir.path().join("orders.csv");
    table.save_csv(&path).unwrap();
    let reloaded = DataTable::from_csv_path(&path).unwrap();
    assert_eq!(reloaded.to_array(), table.to_array());
}

#[test]
fn test_iterator_to_table() {
    #[derive(Serialize)]
    struct Reading {
        sensor: &'static str,
        value: i32,
    }

    let readings = vec![
        Reading { sensor: "a", value: 3 },
        Reading { sensor: "b", value: 9 },
        Reading { sensor: "a", value: 5 },
    ];
    let table = readings.into_iter().to_data_table("readings").unwrap();
    let sensor_a = table.filter("sensor = 'a'");
    assert_eq!(sensor_a.row_count(), 2);

    let values: Vec<i32> = sensor_a.map_rows(|row| {
        row.get("value").and_then(|v| v.as_i64()).unwrap_or_default() as i32
    });
    assert_eq!(values.as_slice().max_or_zero(), 5);
}
