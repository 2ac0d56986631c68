// Copyright 2025 Cowboy AI, LLC.

//! Walkthrough of the Δ-Σ reconstruction of Peano arithmetic.
//!
//! Presentation only: this binary is an external consumer of the public
//! kernel API and has no bearing on its correctness. Run with
//! `cargo run --example delta_sigma_walkthrough`.

use cim_peano::{add, delta, from_int, is_even, is_zero, multiply, value, Branch, Tracer};

fn main() -> Result<(), cim_peano::KernelError> {
    println!("{}", "=".repeat(60));
    println!("Δ-Σ RECONSTRUCTION OF PEANO ARITHMETIC");
    println!("{}", "=".repeat(60));

    // 1. Number construction
    println!("\n1. NUMBER CONSTRUCTION:");
    for k in 0..5 {
        println!("  from_int({k}) = {}", from_int(k));
    }

    // 2. Addition, with every Δ and Σ act recorded
    println!("\n2. ADDITION (Δ-Σ DECOMPOSITION):");
    let a = from_int(2);
    let b = from_int(3);
    let mut tracer = Tracer::new();
    let sum = tracer.add(&a, &b)?;
    println!("  {a} + {b} = {sum}");
    println!("  check: 2 + 3 = {}", value(&sum));
    println!("\n  trace of 2 + 3:");
    for step in &tracer.into_trace() {
        println!("  {step}");
    }

    // 3. Multiplication as iterated addition
    println!("\n3. MULTIPLICATION (Δ-Σ DECOMPOSITION):");
    let product = multiply(&a, &b);
    println!("  {a} * {b} = {product}");
    println!("  check: 2 * 3 = {}", value(&product));

    // 4. Predicates
    println!("\n4. PREDICATES (PURE Δ-ACTS):");
    for k in 0..4 {
        let n = from_int(k);
        println!(
            "  is_zero({k}) = {} | is_even({k}) = {}",
            is_zero(&n),
            is_even(&n)
        );
    }

    // 5. Structural analysis through Δ
    println!("\n5. STRUCTURAL ANALYSIS THROUGH Δ:");
    for k in 0..4 {
        let n = from_int(k);
        let branch = Branch::of(&delta(&n));
        println!("  Δ({k} = {n}) -> {branch}");
        if let Some(pred) = n.pred() {
            let inner = Branch::of(&delta(pred));
            println!("    Δ({pred}) -> {inner}");
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Every operation above is a composition of Δ (branch)");
    println!("and Σ (combine); removing either destroys, respectively,");
    println!("branching or recursive composition.");
    println!("{}", "=".repeat(60));

    // Verification summary
    assert_eq!(value(&add(&from_int(2), &from_int(3))), 5);
    assert_eq!(value(&multiply(&from_int(2), &from_int(3))), 6);
    println!("\nverified: 2 + 3 = 5, 2 * 3 = 6");

    Ok(())
}
