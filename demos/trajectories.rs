//! Example: compare two sampled trajectories.
//!
//! Run with:
//! `cargo run --example trajectories`

use frechet_dp::{frechet_from_lines, ParseMode};

fn main() {
    // the same path, sampled at different rates
    let dense = "0,0;1,1;2,2;3,3;4,4;5,5;6,6;7,7;8,8";
    let sparse = "0,0;4,4;8,8";
    // a path that detours halfway
    let detour = "0,0;2,2;4,9;6,6;8,8";

    for (name, other) in [("sparse", sparse), ("detour", detour)] {
        match frechet_from_lines(dense, other, ParseMode::Strict) {
            Ok(outcome) => {
                println!("dense vs {name}: {:.4}", outcome.distance);
                if let Some(path) = outcome.coupling() {
                    println!("  coupling length: {}", path.len());
                }
            }
            Err(err) => eprintln!("dense vs {name}: {err}"),
        }
    }
}
