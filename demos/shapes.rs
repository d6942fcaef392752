//! Runs the validator and the repairer over a handful of literal shapes.
//!
//! ```text
//! cargo run --example shapes
//! RUST_LOG=shapefix=debug cargo run --example shapes
//! ```

use shapefix::{IsValid, Polygon, Repair};

fn main() -> shapefix::Result<()> {
    // Default: WARN for everything, INFO for shapefix.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shapefix=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shapefix=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let shapes: [(&str, &[[i32; 2]]); 5] = [
        (
            "simple square",
            &[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
        ),
        (
            "square inside a square",
            &[
                [0, 0],
                [10, 0],
                [10, 10],
                [0, 10],
                [0, 0],
                [3, 3],
                [7, 3],
                [7, 7],
                [3, 7],
                [3, 3],
            ],
        ),
        (
            "repeated points",
            &[[0, 0], [10, 0], [0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
        ),
        (
            "intersecting edges",
            &[[0, 0], [10, 0], [0, 10], [10, 10], [0, 0]],
        ),
        (
            "convex polygon",
            &[[0, 0], [5, 0], [10, 5], [5, 10], [0, 5], [0, 0]],
        ),
    ];

    for (name, coords) in shapes {
        let shape = Polygon::from_coords(coords);
        println!("{name}");
        match IsValid::new(&shape).check() {
            Ok(()) => println!("  valid"),
            Err(defect) => {
                println!("  invalid: {defect}");
                let repaired = Repair::new(shape).execute()?;
                let verdict = match IsValid::new(&repaired).check() {
                    Ok(()) => "valid".to_owned(),
                    Err(defect) => format!("still invalid: {defect}"),
                };
                println!("  after repair ({} points): {verdict}", repaired.len());
            }
        }
    }
    Ok(())
}
