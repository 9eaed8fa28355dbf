//! CSV Round Trip Example
//!
//! Decodes a small document, prints the rows, and encodes them back:
//! - Quoted fields with embedded delimiters and quotes
//! - Header growth when a later row is wider
//! - Null values written as NULL

use csvrows::{CsvConfig, CsvReader, CsvWriter, Row};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== CSV Round Trip ===\n");

    let text = "id,name,quote\n1,Alice,\"she said \"\"hi\"\"\"\n2,\"Bob, Jr.\",\n3,Carol,x,extra";

    // 1. Decode with stats
    println!("1. Decoding...");
    let reader = CsvReader::new(CsvConfig::new())?;
    let (rows, stats) = reader.read_with_stats(text)?;
    for row in &rows {
        println!("   {}", row);
    }
    println!(
        "   {} rows from {} records, {} skipped",
        stats.rows, stats.records, stats.skipped_rows
    );

    // 2. Encode back
    println!("\n2. Encoding...");
    let writer = CsvWriter::default();
    println!("{}", writer.write(&rows)?);

    // 3. Header growth and nulls
    println!("\n3. Header growth and nulls...");
    let mut wide = Row::new();
    wide.insert("id", "4");
    wide.insert("name", "Dan");
    wide.insert("quote", "");
    wide.insert_null("email");

    let mut grown = rows.clone();
    grown.push(wide);
    println!("{}", writer.write(&grown)?);

    Ok(())
}
