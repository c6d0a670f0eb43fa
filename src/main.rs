extern crate ordered_skipmap;
extern crate rand;
extern crate simplelog;
#[macro_use]
extern crate log;

use ordered_skipmap::skiplist::SkipMap;
use rand::Rng;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::process;

const DEFAULT_INSERT_COUNT: usize = 100_000;
const KEY_RANGE: i64 = 1_000_000_000;
const KEY_SCALE: i64 = 1234;
const VALUE: i64 = 777;

fn run(insert_count: usize, dump_path: Option<String>) -> ordered_skipmap::Result<()> {
    let mut rng = rand::thread_rng();
    let mut map = SkipMap::new();

    for _ in 0..insert_count {
        let mut key = rng.gen_range(0, KEY_RANGE);
        if rng.gen() {
            key = -key;
        }
        if rng.gen() {
            key *= KEY_SCALE;
        }
        map.insert(key, VALUE);
    }
    info!(
        "inserted {} keys, {} distinct, {} levels",
        insert_count,
        map.len(),
        map.levels(),
    );

    match dump_path {
        Some(path) => map.dump_to_path(path),
        None => map.print_dump(),
    }
}

fn main() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let mut args = env::args().skip(1);
    let insert_count = match args.next() {
        Some(arg) => match arg.parse() {
            Ok(count) => count,
            Err(_) => {
                eprintln!("usage: ordered-skipmap [insert_count] [dump_path]");
                process::exit(2);
            },
        },
        None => DEFAULT_INSERT_COUNT,
    };

    if let Err(err) = run(insert_count, args.next()) {
        error!("{}", err);
        process::exit(1);
    }
}
