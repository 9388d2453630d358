//! Basic selection example.
//!
//! Builds an engine over every available signal, then picks, shuffles,
//! samples and prints a token.
//!
//! Run: `RUST_LOG=debug cargo run --example basic`

use std::collections::HashMap;

use chaospick_core::{ChaosEngine, Collection};

fn main() {
    env_logger::init();

    let engine = ChaosEngine::new();

    println!("Signals registered: {}", engine.collector().signal_count());
    for info in engine.collector().signal_infos() {
        println!("  {:<16} {:<11} {}", info.name, info.kind, info.description);
    }

    let fruits = vec!["apple", "banana", "cherry", "damson"];
    println!("\nPick: {:?}", engine.pick(&fruits));

    let grid = vec![vec![1, 2, 3], vec![4, 5]];
    println!("Ragged grid pick: {:?}", engine.pick(Collection::nested(&grid)));

    let prices: HashMap<&str, u32> = HashMap::from([("tea", 3), ("coffee", 4)]);
    println!("Mapping value pick: {:?}", engine.pick(&prices));

    let mut deck: Vec<u8> = (1..=10).collect();
    engine.shuffle(&mut deck);
    println!("Shuffled: {deck:?}");

    match engine.sample(&deck, 3) {
        Ok(hand) => println!("Sample of 3: {hand:?}"),
        Err(e) => eprintln!("sample failed: {e}"),
    }

    match engine.randint(1, 6) {
        Ok(roll) => println!("Die roll: {roll}"),
        Err(e) => eprintln!("randint failed: {e}"),
    }
    println!("Coin: {}", if engine.coin() { "heads" } else { "tails" });
    println!("Token: {}", engine.token_hex_default());

    println!("\nDraws served: {}", engine.collector().draws());
}
