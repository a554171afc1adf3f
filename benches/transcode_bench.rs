//! Quick benchmark for the recursive transcoders and the type filter

use serde_json::{json, Map, Value};
use shapekit::{array_to_object, filter_array, object_to_array, TypeTag};
use std::time::Instant;

/// Object `depth` levels deep with `width` scalar keys per level
fn nested_object(depth: usize, width: usize) -> Value {
    let mut map = Map::new();
    for i in 0..width {
        map.insert(format!("k{}", i), json!(i));
    }
    if depth > 0 {
        map.insert("child".to_string(), nested_object(depth - 1, width));
    }
    Value::Object(map)
}

fn main() {
    println!("Transcoder Performance Test");
    println!("===========================\n");

    let shapes = [(1, 8), (4, 8), (8, 16), (16, 32)];

    for (depth, width) in shapes {
        let input = nested_object(depth, width);
        let iterations = 10_000u32;

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = object_to_array(&input);
        }
        let elapsed = start.elapsed();

        println!("object_to_array depth={} width={}", depth, width);
        println!("  Time for {} iterations: {:?}", iterations, elapsed);
        println!("  Per operation: {:?}\n", elapsed / iterations);
    }

    let entries: Vec<Value> = (0..1_000).map(|i| json!([format!("key{}", i), i, i * 2])).collect();
    let entries = Value::Array(entries);
    let iterations = 1_000u32;
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = array_to_object(&entries, 0);
    }
    let elapsed = start.elapsed();
    println!("array_to_object 1000 entries");
    println!("  Per operation: {:?}\n", elapsed / iterations);

    let mixed: Vec<Value> = (0..1_000)
        .map(|i| match i % 4 {
            0 => json!(i),
            1 => json!(format!("s{}", i)),
            2 => json!([i, "x", [true, i]]),
            _ => json!(null),
        })
        .collect();
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = filter_array(&mixed, &[TypeTag::Number, TypeTag::Boolean]);
    }
    let elapsed = start.elapsed();
    println!("filter_array 1000 mixed elements");
    println!("  Per operation: {:?}", elapsed / iterations);
}
