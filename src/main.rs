// Performance measurement for TreeSet instances. Measure:
// * Initial load of `n` random keys.
// * Lookup of every loaded key.
// * Floor/ceiling for random keys.
// * Delete of every loaded key, in a different random order.
//
// Usage: rbtree-set [n] [seed]

use std::{env, process, time::Instant};

use log::{error, info};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rbtree_set::{compare::natural, TreeSet};

fn main() {
    let logger = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = logger {
        eprintln!("logger: {}", err);
    }

    let mut args = env::args().skip(1);
    let n: usize = parse_arg(args.next(), 1_000_000);
    let seed: u64 = parse_arg(args.next(), 0x5eed);
    let mut rng = SmallRng::seed_from_u64(seed);
    info!("n:{} seed:{}", n, seed);

    let mut keys: Vec<u64> = (0..n).map(|_| rng.gen()).collect();

    let start = Instant::now();
    let mut set = TreeSet::new(natural::<u64>);
    for key in keys.iter() {
        set.add(*key);
    }
    info!("load {} entries in {:?}", set.len(), start.elapsed());

    match set.validate() {
        Ok(stats) => info!("{}", stats),
        Err(err) => {
            error!("validate: {}", err);
            process::exit(1);
        }
    }

    let start = Instant::now();
    let found = keys.iter().filter(|key| set.contains(key)).count();
    info!("get {} entries in {:?}", found, start.elapsed());

    let start = Instant::now();
    let mut hits = 0;
    for _ in 0..n {
        let key: u64 = rng.gen();
        hits += set.floor(&key).is_some() as usize;
        hits += set.ceiling(&key).is_some() as usize;
    }
    info!("floor/ceiling {} hits in {:?}", hits, start.elapsed());

    keys.shuffle(&mut rng);
    let start = Instant::now();
    let deleted = keys.iter().filter(|key| set.remove(key).is_some()).count();
    info!("delete {} entries in {:?}", deleted, start.elapsed());

    if !set.is_empty() {
        error!("{} entries left after delete", set.len());
        process::exit(1);
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T) -> T {
    match arg.map(|arg| arg.parse::<T>()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            eprintln!("usage: rbtree-set [n] [seed]");
            process::exit(2);
        }
    }
}
