use std::path::Path;

use anyhow::{Context, Result};
use primer::data_structures::{Queue, Stack};
use primer::instrument::{add, logged};
use primer::numerical::{factorial, fibonacci, is_prime};
use primer::persist::{self, Record};
use primer::searching::binary_search;
use primer::shapes::{AnyShape, Circle, Rectangle, Shape};
use primer::sorting::bubble_sort;
use primer::text::random_string;
use serde_json::{json, Value};
use tracing::info;

use crate::cli::Command;

pub fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Demo { data_file, random_len } => run_demo(&data_file, random_len),
        Command::Save { out, pairs } => {
            let record: Record = pairs
                .into_iter()
                .map(|(key, raw)| (key, parse_value(&raw)))
                .collect();
            persist::save_to_file(&out, &record)
                .with_context(|| format!("saving record to {}", out.display()))?;
            info!(path = %out.display(), keys = record.len(), "record saved");
            Ok(())
        }
        Command::Load { path } => {
            let record = persist::load_from_file(&path)
                .with_context(|| format!("loading record from {}", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
    }
}

/// JSON when it parses, otherwise the raw text as a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn run_demo(data_file: &Path, random_len: usize) -> Result<()> {
    println!("=== Utilities ===");
    println!("Factorial(5): {}", factorial(5)?);
    println!("Fibonacci(10): {}", fibonacci(10)?);
    println!("Is 29 prime? {}", is_prime(29));
    println!("Random string: {}", random_string(random_len));

    println!("\n=== Data Structures ===");
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    let popped = stack.pop();
    println!("Stack: {stack} Popped: {popped:?}");

    let mut queue = Queue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    queue.enqueue("c");
    let dequeued = queue.dequeue();
    println!("Queue: {queue} Dequeued: {dequeued:?}");

    println!("\n=== Shapes ===");
    let shapes: Vec<AnyShape> = vec![Rectangle::new(4.0, 6.0)?.into(), Circle::new(3.0)?.into()];
    for shape in &shapes {
        let name = match shape {
            AnyShape::Rectangle(_) => "Rectangle",
            AnyShape::Circle(_) => "Circle",
        };
        println!("{name} area: {} perimeter: {}", shape.area(), shape.perimeter());
    }

    println!("\n=== Algorithms ===");
    let mut arr = vec![5, 2, 9, 1, 5, 6];
    bubble_sort(&mut arr);
    println!("Bubble sort: {arr:?}");
    println!("Binary search (find 5): {:?}", binary_search(&arr, &5));

    println!("\n=== Logging ===");
    let logged_add = logged("add", |(a, b): (i64, i64)| add(a, b));
    println!("add(10, 20) = {}", logged_add((10, 20)));

    println!("\n=== File I/O ===");
    let mut sample = Record::new();
    sample.insert("user".to_string(), json!("Alice"));
    sample.insert("score".to_string(), json!(42));
    sample.insert("shapes".to_string(), serde_json::to_value(&shapes)?);
    persist::save_to_file(data_file, &sample)
        .with_context(|| format!("saving sample to {}", data_file.display()))?;
    let loaded = persist::load_from_file(data_file)
        .with_context(|| format!("loading sample from {}", data_file.display()))?;
    println!("Loaded from file: {}", Value::Object(loaded));
    Ok(())
}
