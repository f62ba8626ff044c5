//! CLI deck demonstration.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use cardstack::{CardStack, populate_seeded};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("Generating a new card deck.");
    let mut deck = CardStack::new();
    populate_seeded(&mut deck, true, seed);
    println!("{deck}");
    println!("(in card deck)");

    println!("Take out the 1st card.");
    let Some(first) = deck.pop() else {
        return;
    };
    println!("{deck}");
    println!("(in card deck)");

    println!("Take out the 2nd card and compare two cards.");
    let Some(second) = deck.pop() else {
        return;
    };
    println!("{first} (1st card)");
    println!("{second} (2nd card)");
    println!("{first} = {second} -> {}", first == second);
    println!("{first} < {second} -> {}", first < second);
    println!("{first} > {second} -> {}", first > second);

    println!("Take out the last card.");
    while deck.pop().is_some() {}
    println!("{deck}");
    println!("(in card deck)");

    println!("Generating a new card deck without Joker.");
    let mut deck = CardStack::new();
    populate_seeded(&mut deck, false, seed.wrapping_add(1));
    println!("{deck}");
    println!("(in card deck)");
    println!("in Joker -> {}", deck.to_string().contains("JK"));
}
