use anyhow::{Context, Result};
use dynamic_collection::{DynamicArray, dynamic_array};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .init();

    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.add(i * 10);
        println!("Added: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }
    println!("Elements: {arr}");

    arr.insert_at(0, 5)?;
    arr.exchange(1, 5)?;
    let removed = arr.remove_at(2)?;
    println!("Removed {removed}, now: {arr}");

    let mut words = dynamic_array!["Zero", "One"];
    words.add("Two");
    println!("Words: {words}");

    arr.clear();
    println!("After clear: {arr}, cap kept at {}", arr.capacity());

    // Out-of-range access surfaces as an ordinary error.
    if let Err(err) = words.get(5).context("looking up a word past the end") {
        println!("{err:#}");
    }
    Ok(())
}
