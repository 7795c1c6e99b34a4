//! Order-shaped fixtures shared by the integration tests.

#![allow(dead_code)]

use mongodb::bson::{Document, doc};

/// Eight orders spanning every region, ship mode, and category the report
/// touches, with sales on both sides of the 50 and 500 thresholds. Every
/// sales value is exactly representable as an f64 so group sums compare
/// exactly regardless of accumulation order.
pub fn order_documents() -> Vec<Document> {
    vec![
        doc! { "Region": "West", "Sales": 600.0, "Profit": 120.5, "Ship Mode": "First Class", "Category": "Furniture" },
        doc! { "Region": "East", "Sales": 100.0, "Profit": 20.0, "Ship Mode": "Second Class", "Category": "Technology" },
        doc! { "Region": "West", "Sales": 40.0, "Profit": -5.0, "Ship Mode": "Standard Class", "Category": "Office Supplies" },
        doc! { "Region": "South", "Sales": 750.25, "Profit": 90.0, "Ship Mode": "First Class", "Category": "Technology" },
        doc! { "Region": "Central", "Sales": 20.0, "Profit": 2.5, "Ship Mode": "Same Day", "Category": "Office Supplies" },
        doc! { "Region": "East", "Sales": 510.0, "Profit": 200.0, "Ship Mode": "Standard Class", "Category": "Furniture" },
        doc! { "Region": "West", "Sales": 55.5, "Profit": 10.0, "Ship Mode": "First Class", "Category": "Office Supplies" },
        doc! { "Region": "South", "Sales": 49.5, "Profit": -12.0, "Ship Mode": "Second Class", "Category": "Furniture" },
    ]
}

/// The three-row scenario: regions West/East/West with sales 600/100/40.
pub fn three_row_documents() -> Vec<Document> {
    vec![
        doc! { "Region": "West", "Sales": 600, "Profit": 120, "Ship Mode": "First Class", "Category": "Furniture" },
        doc! { "Region": "East", "Sales": 100, "Profit": 20, "Ship Mode": "Second Class", "Category": "Technology" },
        doc! { "Region": "West", "Sales": 40, "Profit": -5, "Ship Mode": "Standard Class", "Category": "Office Supplies" },
    ]
}

/// CSV text matching `three_row_documents`.
pub fn three_row_csv() -> &'static str {
    "Region,Sales,Profit,Ship Mode,Category\n\
     West,600,120,First Class,Furniture\n\
     East,100,20,Second Class,Technology\n\
     West,40,-5,Standard Class,Office Supplies\n"
}
