//! Walkthrough: Capabilities, Orbits and Reduction
//!
//! Run with: cargo run --example eop_walkthrough [-- sampler.json]
//!
//! This example demonstrates:
//! - Capability reports for a handful of signatures
//! - Classifying callables of different shapes
//! - Orbits that terminate, cycle, or run into a ρ
//! - Reducing sampled reals and comparing with a plain fold
//!
//! Set `RUST_LOG=eop_algo=debug` to see the algorithms' events.

use std::error::Error;

use eop_algo::support::{sample_uniform, RealEqual, SamplerConfig};
use eop_algo::{
    addition_defined, circular_orbit, collision_point, collision_point_within, reduce, reduce_nonempty,
    terminating_orbit,
};
use eop_core::callable::{arity_of, describe, kind_of, Callable, FunctionObject, Functor};
use eop_core::relation::{check_law, RelationLaw};
use eop_core::signature::Sig;
use eop_core::{capabilities, field};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Reading {
    celsius: f64,
}

eop_core::bare!(Reading);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SamplerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SamplerConfig::default(),
    };
    info!(?config, "sampler configuration");

    println!("=== Callable Capabilities ===\n");

    // -------------------------------------------------------------------------
    // Capability reports
    // -------------------------------------------------------------------------
    println!("1. Capability Reports");
    println!("---------------------");

    let rows = [
        ("fn() -> u8", capabilities!(Sig<u8, ()>)),
        ("fn(i32) -> i32", capabilities!(Sig<i32, (i32,)>)),
        ("fn(&i32) -> bool", capabilities!(Sig<bool, (&'static i32,)>)),
        ("fn(i32, i32) -> i32", capabilities!(Sig<i32, (i32, i32)>)),
        ("fn(&f64, f64) -> bool", capabilities!(Sig<bool, (&'static f64, f64)>)),
        ("fn(i32, f64) -> i32", capabilities!(Sig<i32, (i32, f64)>)),
        ("fn(u8, u8, u8) -> u8", capabilities!(Sig<u8, (u8, u8, u8)>)),
    ];
    for (name, caps) in rows {
        println!("{name:<24} {caps}");
    }
    println!();

    // -------------------------------------------------------------------------
    // Callable shapes
    // -------------------------------------------------------------------------
    println!("2. Callable Shapes");
    println!("------------------");

    let celsius = field!(Reading, celsius);
    let warm = |r: &Reading| r.celsius > 20.0;
    let close = Functor(RealEqual::new(0.5f64));

    println!("field accessor: {} ({}, arity {})", describe(&celsius), kind_of(&celsius), arity_of(&celsius));
    println!("closure:        {} ({}, arity {})", describe(&warm), kind_of(&warm), arity_of(&warm));
    println!("function obj:   {} ({}, arity {})", describe(&close), kind_of(&close), arity_of(&close));

    let reading = Reading { celsius: 21.5 };
    println!(
        "reading: {} degrees, warm {}",
        celsius.invoke((&reading,)),
        warm.invoke((&reading,))
    );

    let samples = [0.0, 0.3, 0.6];
    for law in [RelationLaw::Reflexive, RelationLaw::Symmetric, RelationLaw::Transitive] {
        match check_law(&close, law, &samples) {
            Ok(()) => println!("RealEqual(0.5) is {law} on {samples:?}"),
            Err(e) => println!("{e}"),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Orbits
    // -------------------------------------------------------------------------
    println!("3. Orbits");
    println!("---------");

    let x = 0x7FFF_FFFF - 133;
    let successor = |v: i32| v + 1;
    let defined = |v: i32| addition_defined(v, 1);
    println!(
        "x = {x}: terminating {}, circular {}, collision point {}",
        terminating_orbit(x, successor, defined),
        circular_orbit(x, successor, defined),
        collision_point(x, successor, defined),
    );

    let clock = |h: u8| (h + 1) % 12;
    println!("clock from 5: circular {}", circular_orbit(5u8, clock, |_: u8| true));

    let rho = |v: u8| if v < 9 { v + 1 } else { 3 };
    println!(
        "rho from 0: terminating {}, circular {}, collision point {}",
        terminating_orbit(0u8, rho, |_: u8| true),
        circular_orbit(0u8, rho, |_: u8| true),
        collision_point(0u8, rho, |_: u8| true),
    );

    let lcg = |v: u64| v.wrapping_mul(6364136223846793005).wrapping_add(1);
    match collision_point_within(1u64, lcg, |_: u64| true, 1000) {
        Ok(point) => println!("LCG settled at {point}"),
        Err(e) => println!("LCG: {e}"),
    }
    println!();

    // -------------------------------------------------------------------------
    // Reduction
    // -------------------------------------------------------------------------
    println!("4. Reduction");
    println!("------------");

    let values: Vec<f32> = sample_uniform(&config)?;
    let add = |a: f32, b: f32| a + b;
    let fold = values.iter().fold(0.0f32, |acc, v| acc + v);
    let equal = RealEqual::new(1e-6f32);

    println!("{} samples in [{}, {}]", values.len(), config.lo, config.hi);
    if values.is_empty() {
        println!("reduce(empty, +, 0) = {}", reduce(values, add, 0.0));
    } else {
        let sum = reduce_nonempty(values.iter().copied(), add);
        println!("reduce_nonempty = {sum}");
        println!("left fold       = {fold}");
        println!("equal within 1e-6: {}", equal.call((sum, fold)));
    }

    println!("\n=== Done ===");
    Ok(())
}
