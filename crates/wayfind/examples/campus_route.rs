//! Route between two campus rooms and print the answer.
//!
//! Usage: `cargo run -p wayfind --example campus_route -- [START] [END]`
//! (defaults to `BEE` and `DBMS`). Set `RUST_LOG=debug` to see search
//! summaries.

use std::error::Error;
use wayfind::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| "BEE".to_owned());
    let end = args.next().unwrap_or_else(|| "DBMS".to_owned());

    let nav = Navigator::campus()?;
    println!("=== Campus map ===\n");
    println!("{}", nav.render_map());

    let response = match nav.route_between_rooms(&start, &end) {
        Ok(response) => response,
        Err(e) if e.is_not_found() => {
            eprintln!("404: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("=== {start} -> {end} ===\n");
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(route) = Route::new(response.route) {
        println!();
        for leg in route.legs() {
            println!(
                "floor {}: {} -> {} ({} steps)",
                leg.floor,
                leg.entry(),
                leg.exit(),
                leg.steps()
            );
        }
        println!(
            "total: {} steps, {} floor changes",
            route.cost(),
            route.floor_changes()
        );
    } else {
        println!("no route");
    }
    Ok(())
}
