use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use chain_hash::HashTable;
use chain_hash::hash_table::Entry;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "values", default_value_t = 1000)]
    values: usize,

    /// Percentage of the inserted values to remove afterwards.
    #[arg(short = 'r', long = "remove_percent", default_value_t = 0)]
    remove_percent: u8,
}

fn hash_u64(value: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let args = Args::parse();

    let mut table: HashTable<u64> = HashTable::new();
    println!("Initial capacity: {}", table.capacity());
    println!("Filling table with {} u64 values...", args.values);

    let mut resizes = 0;
    for i in 0..args.values {
        let value = i as u64;
        let before = table.capacity();

        match table.entry(hash_u64(value), |&v| v == value) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(_) => {
                panic!("Value already exists in table: {}", value);
            }
        }

        if table.capacity() != before {
            resizes += 1;
        }
    }

    println!(
        "Inserted {} values, {} resizes, capacity {}",
        table.len(),
        resizes,
        table.capacity()
    );
    println!("Load factor: {:.2}%", table.load_factor() * 100.0);

    table.print_bucket_histogram();
    table.debug_stats().print();

    if args.remove_percent > 0 {
        let to_remove = args.values * usize::from(args.remove_percent.min(100)) / 100;
        for i in 0..to_remove {
            let value = i as u64;
            table.remove(hash_u64(value), |&v| v == value);
        }

        println!(
            "Removed {} values, capacity now {} (load factor {:.2}%)",
            to_remove,
            table.capacity(),
            table.load_factor() * 100.0
        );
        table.print_bucket_histogram();
        table.debug_stats().print();
    }
}
