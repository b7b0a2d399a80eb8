#[macro_use]
extern crate log;
extern crate num_bigint;
extern crate simplelog;
extern crate splay_memo;

use num_bigint::BigUint;
use simplelog::{Config, LevelFilter, SimpleLogger};
use splay_memo::memo::fibonacci;
use splay_memo::splay_tree::SplayTree;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::env;
use std::error::Error;
use std::time::{Duration, Instant};

const DEFAULT_MAX_N: u64 = 950;
const DEFAULT_STEP: u64 = 50;

struct Timing {
    n: u64,
    hash_map: Duration,
    splay_tree: Duration,
}

fn parse_arg(arg: Option<String>, default: u64) -> Result<u64, Box<dyn Error>> {
    match arg {
        Some(arg) => Ok(arg.parse()?),
        None => Ok(default),
    }
}

fn parse_step(arg: Option<String>) -> Result<usize, Box<dyn Error>> {
    let step = usize::try_from(parse_arg(arg, DEFAULT_STEP)?)?;
    if step == 0 {
        return Err("step must be positive".into());
    }
    Ok(step)
}

fn time_run(n: u64) -> Result<Timing, Box<dyn Error>> {
    let mut map = HashMap::new();
    let start = Instant::now();
    let hash_map_value: BigUint = fibonacci(n, &mut map);
    let hash_map = start.elapsed();

    let mut tree = SplayTree::new();
    let start = Instant::now();
    let splay_tree_value: BigUint = fibonacci(n, &mut tree);
    let splay_tree = start.elapsed();

    debug!(
        "n = {}: {} cached in hash map, {} cached in splay tree",
        n,
        map.len(),
        tree.len(),
    );
    if hash_map_value != splay_tree_value {
        return Err(format!(
            "caches disagree on fibonacci({}): {} in hash map, {} in splay tree",
            n, hash_map_value, splay_tree_value,
        )
        .into());
    }

    Ok(Timing {
        n,
        hash_map,
        splay_tree,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    let mut args = env::args().skip(1);
    let max_n = parse_arg(args.next(), DEFAULT_MAX_N)?;
    let step = parse_step(args.next())?;

    info!("timing memoized fibonacci for n in 0..={} by {}", max_n, step);
    let timings = (0..=max_n)
        .step_by(step)
        .map(time_run)
        .collect::<Result<Vec<Timing>, _>>()?;

    println!("{:<10}{:<20}{:<20}", "n", "HashMap Time (s)", "Splay Tree Time (s)");
    println!("{}", "-".repeat(50));
    for timing in &timings {
        println!(
            "{:<10}{:<20.8}{:<20.8}",
            timing.n,
            timing.hash_map.as_secs_f64(),
            timing.splay_tree.as_secs_f64(),
        );
    }

    Ok(())
}
