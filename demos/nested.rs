use std::fmt::Display;

use anyhow::Result;
use dynamic_collection::{DynamicArray, dynamic_array};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let names = dynamic_array!["Teddy", "Gerry"];
    let nums = dynamic_array![10, 20];
    let dates: DynamicArray<String> = DynamicArray::new();

    let mut nested: DynamicArray<Box<dyn Display>> = DynamicArray::new();
    nested.add(Box::new(names));
    nested.add(Box::new(nums));
    nested.add(Box::new(dates));
    println!("{nested}");

    let mut grid: DynamicArray<DynamicArray<u8>> = (0..3).map(|row| (row..row + 3).collect()).collect();
    grid.get_mut(1)?.add(99);
    grid.exchange(0, 2)?;
    println!("{grid}");
    println!("{grid:?}");

    Ok(())
}
