//! The fixed query report: ten operations run in order against the loaded
//! collection, each printing a labeled result to stdout and each caught at
//! its own boundary so a failing step never halts the ones after it.

use mongodb::Client;
use mongodb::bson::{Bson, Document, doc};

use crate::error::Result;
use crate::store::StoreManager;

// Column names of the Superstore dataset the report is written against.
const REGION: &str = "Region";
const SALES: &str = "Sales";
const PROFIT: &str = "Profit";
const SHIP_MODE: &str = "Ship Mode";
const CATEGORY: &str = "Category";

/// Everything a report step needs to reach the store.
pub struct ReportContext<'a> {
    pub manager: &'a StoreManager,
    pub client: &'a Client,
    pub database: &'a str,
    pub collection: &'a str,
}

/// Run all ten report steps in order. Step failures are logged and the next
/// step is attempted regardless.
pub fn run(ctx: &ReportContext) {
    run_step(1, "All documents", || full_scan(ctx));
    run_step(2, "Total number of documents", || count_all(ctx));
    run_step(3, "Documents where Region = \"West\"", || filter_region_west(ctx));
    run_step(4, "Documents where Sales > 500", || filter_high_sales(ctx));
    run_step(5, "Top 3 documents by Profit", || top_by_profit(ctx));
    run_step(6, "Updating Ship Mode from \"First Class\" to \"Premium Class\"", || {
        upgrade_ship_mode(ctx)
    });
    run_step(7, "Deleting documents where Sales < 50", || delete_low_sales(ctx));
    run_step(8, "Total Sales per Region", || sales_per_region(ctx));
    run_step(9, "Distinct Ship Mode values", || distinct_ship_modes(ctx));
    run_step(10, "Document count per Category", || count_per_category(ctx));
}

fn run_step(number: u32, title: &str, step: impl FnOnce() -> Result<()>) {
    println!("\n#{number} {title}:");
    if let Err(err) = step() {
        log::error!("report step {number} ({title}) failed: {err}");
    }
}

fn full_scan(ctx: &ReportContext) -> Result<()> {
    let docs =
        ctx.manager.find_documents(ctx.client, ctx.database, ctx.collection, doc! {})?;
    print_documents(&docs)
}

fn count_all(ctx: &ReportContext) -> Result<()> {
    let count =
        ctx.manager.count_documents(ctx.client, ctx.database, ctx.collection, doc! {})?;
    println!("Total: {count}");
    Ok(())
}

fn filter_region_west(ctx: &ReportContext) -> Result<()> {
    let docs = ctx.manager.find_documents(
        ctx.client,
        ctx.database,
        ctx.collection,
        doc! { REGION: "West" },
    )?;
    print_documents(&docs)
}

fn filter_high_sales(ctx: &ReportContext) -> Result<()> {
    let docs = ctx.manager.find_documents(
        ctx.client,
        ctx.database,
        ctx.collection,
        doc! { SALES: { "$gt": 500 } },
    )?;
    print_documents(&docs)
}

fn top_by_profit(ctx: &ReportContext) -> Result<()> {
    let docs = ctx.manager.find_top(ctx.client, ctx.database, ctx.collection, PROFIT, 3)?;
    print_documents(&docs)
}

fn upgrade_ship_mode(ctx: &ReportContext) -> Result<()> {
    let modified = ctx.manager.update_field_where(
        ctx.client,
        ctx.database,
        ctx.collection,
        SHIP_MODE,
        "First Class",
        "Premium Class",
    )?;
    println!("{modified} documents updated.");
    Ok(())
}

fn delete_low_sales(ctx: &ReportContext) -> Result<()> {
    let deleted = ctx.manager.delete_documents(
        ctx.client,
        ctx.database,
        ctx.collection,
        doc! { SALES: { "$lt": 50 } },
    )?;
    println!("{deleted} documents deleted.");
    Ok(())
}

fn sales_per_region(ctx: &ReportContext) -> Result<()> {
    let groups =
        ctx.manager.sum_by_group(ctx.client, ctx.database, ctx.collection, REGION, SALES)?;
    print_groups(&groups, "total");
    Ok(())
}

fn distinct_ship_modes(ctx: &ReportContext) -> Result<()> {
    let values =
        ctx.manager.distinct_values(ctx.client, ctx.database, ctx.collection, SHIP_MODE)?;
    for value in &values {
        println!("{}", scalar_to_string(value));
    }
    Ok(())
}

fn count_per_category(ctx: &ReportContext) -> Result<()> {
    let groups = ctx.manager.count_by_group(ctx.client, ctx.database, ctx.collection, CATEGORY)?;
    print_groups(&groups, "count");
    Ok(())
}

/// Print documents as relaxed Extended JSON, one per line.
fn print_documents(docs: &[Document]) -> Result<()> {
    for doc in docs {
        let json_value = Bson::Document(doc.clone()).into_relaxed_extjson();
        println!("{}", serde_json::to_string(&json_value)?);
    }
    Ok(())
}

/// Print `$group` results as one `key: value` line per group.
fn print_groups(groups: &[Document], value_key: &str) {
    for group in groups {
        let key = group.get("_id").map(scalar_to_string).unwrap_or_default();
        let value = group.get(value_key).map(scalar_to_string).unwrap_or_default();
        println!("{key}: {value}");
    }
}

/// Render a scalar BSON value for console output.
fn scalar_to_string(value: &Bson) -> String {
    match value {
        Bson::Null => "null".to_string(),
        Bson::Boolean(b) => b.to_string(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::Double(n) => n.to_string(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
