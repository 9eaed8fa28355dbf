//! Keyed Lookup Example
//!
//! Builds a first-wins index on a column and looks rows up by key.

use csvrows::{CsvConfig, CsvReader, ParseEngine};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Keyed Lookup ===\n");

    let text = "sku,name,price\nA1,Widget,9.99\nB2,\"Gadget, large\",19.50\nA1,Widget v2,10.99";

    let reader = CsvReader::default();
    let (index, stats) = reader.read_keyed_with_stats(text, "sku")?;

    for (sku, row) in &index {
        println!("   {} -> {}", sku, row);
    }
    println!("   {} duplicate keys dropped", stats.duplicate_keys);

    if let Some(row) = index.get("B2") {
        println!("\n   B2 costs {}", row.get("price").unwrap_or("?"));
    }

    // Semicolon-separated input needs the simple engine
    println!("\nSemicolon input with the simple engine...");
    let config = CsvConfig::new().engine(ParseEngine::Simple).delimiter(';');
    let reader = CsvReader::new(config)?;
    let index = reader.read_keyed("sku;name\nC3;Sprocket\n", "sku")?;
    println!("   C3 -> {}", index["C3"]);

    Ok(())
}
