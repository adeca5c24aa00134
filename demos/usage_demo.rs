//! Usage Demo - gating a function on a feature flag
//!
//! HOW TO RUN:
//! ===========
//!
//! ```bash
//! RUST_LOG=feature_gate=debug cargo run --example usage_demo
//! ```
//!
//! This example demonstrates the complete workflow:
//! - Building a gate over an in-memory backend
//! - Wrapping a function with and without a default
//! - Toggling the flag between calls

use std::sync::Arc;

use feature_gate::{telemetry, FeatureGate, MemoryBackend};

fn greet_new(name: &str) -> String {
    format!("Hey {name}, welcome to the new dashboard!")
}

fn greet_old(name: &str) -> String {
    format!("Hello {name}.")
}

fn main() -> anyhow::Result<()> {
    telemetry::init("feature_gate=debug");

    let backend = MemoryBackend::with_features([("new-dashboard", true), ("exports", false)]);
    let gate = FeatureGate::with_tracing(Arc::new(backend.clone()));

    let greet = gate
        .feature_with_default("new-dashboard", greet_old)?
        .wrap(greet_new);
    println!("{}", greet.call("ada")?);

    backend.disable("new-dashboard");
    println!("{}", greet.call("ada")?);

    let export = gate.feature("exports")?.wrap(|rows: usize| rows);
    match export.call(10) {
        Ok(rows) => println!("exported {rows} rows"),
        Err(err) => println!("export unavailable: {err}"),
    }

    // Owned arguments let callers build inputs after the wrapper exists.
    let shout = gate
        .feature("new-dashboard")?
        .wrap(|text: String| text.to_uppercase());
    for word in ["first", "second"] {
        let text = format!("{word} call");
        match shout.call(text) {
            Ok(loud) => println!("{loud}"),
            Err(err) => println!("shout unavailable: {err}"),
        }
    }

    match gate.feature::<(), ()>("does-not-exist") {
        Ok(_) => println!("unexpected"),
        Err(err) => println!("wrap failed: {err}"),
    }

    Ok(())
}
