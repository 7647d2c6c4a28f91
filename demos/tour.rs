//! # Container Tour
//!
//! Walks through the whole public surface: construction, population,
//! custom formatting, the three selection kinds, indexed mutation, column
//! views, and teardown.
//!
//! ```bash
//! cargo run --example tour
//! ```

use csvbuf::{record, Criteria, Header, Record, Table, Value};

fn my_formatter(record: &Record, header: &Header) -> String {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>25} ===> {}", name, record[i]))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> csvbuf::Result<()> {
    // A container with three columns.
    let mut table = Table::with_columns(["id", "first name", "last name"])?;

    table.add(record![1, "John", "Carter"])?;
    table.add(record![2, "John", "Dupond"])?;
    table.add(record![3, "John", "XXXX"])?;

    println!("List of records in the container:");
    println!("{table}");

    // Same listing through a custom formatter.
    table.set_formatter(my_formatter);
    println!("List of records in the container:");
    println!("{table}");

    // Selection by simple equality.
    let records = table.select(&Criteria::new().equals("first name", "John"))?;
    println!("First selection is:");
    for r in &records {
        println!("{}", my_formatter(r, table.header()));
    }

    let records = table.select(&Criteria::new().equals("first name", "John").equals("id", 1))?;
    println!("Second selection is:");
    for r in &records {
        println!("{}", my_formatter(r, table.header()));
    }

    // Selection by pattern matching (anchored at the value's start).
    let records = table.select(
        &Criteria::new()
            .matches("first name", "^J")
            .matches("last name", "^(C|D)"),
    )?;
    println!("Third selection is:");
    for r in &records {
        println!("{}", my_formatter(r, table.header()));
    }

    // Selection by predicate.
    let records = table.select(
        &Criteria::new()
            .satisfies("id", |v| matches!(v, Value::Int(i) if *i < 3))
            .satisfies("first name", |v| v.as_text() != Some("toto4")),
    )?;
    println!("Fourth selection is:");
    for r in &records {
        println!("{}", my_formatter(r, table.header()));
    }

    println!("The container contains {} records", table.len());

    // Replace the first record.
    table.set(0, record![10, "Thomas", "Cook"])?;
    println!("The first record has been changed:");
    println!("{table}");

    // Fetch the second record.
    let record = table.get(1)?.clone();
    println!("This is the second record:");
    println!("{}", my_formatter(&record, table.header()));

    // Name-based cell access.
    println!(
        "Value 'id' of the second record is {}.",
        table.value_of(&record, "id")?
    );

    println!("Container's columns:");
    for name in table.header() {
        println!("    - {name}");
    }

    println!("Values per column:");
    for (name, values) in table.entries() {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("    - {}: [{}]", name, rendered.join(", "));
    }

    println!("Values per column (names omitted):");
    for values in table.value_columns() {
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("    - [{}]", rendered.join(", "));
    }

    // Remove the first record.
    table.remove(0)?;
    println!("The first record has been removed:");
    println!("{table}");

    // Empty the container.
    table.clear();
    println!("The container now holds {} records.", table.len());

    Ok(())
}
