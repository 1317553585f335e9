//! Random craft-style name suggestions for new profiles.

use rand::seq::IndexedRandom;

const PREFIXES: &[&str] = &[
    "white", "orange", "magenta", "blue", "yellow", "red", "lime", "green", "black", "gray",
    "pink", "cyan", "purple", "brown", "small", "large",
];

const NAMES: &[&str] = &[
    "stone", "granite", "andesite", "diorite", "dirt", "podzol", "cobble", "spruce", "oak",
    "birch",
];

const SUFFIXES: &[&str] = &[
    "sapling", "planks", "log", "wood", "sand", "leaves", "block", "stairs", "chest", "barrel",
];

/// A friendly three-part default like `"lime-spruce-barrel"`.
pub fn random_craft_name() -> String {
    let mut rng = rand::rng();
    let prefix = PREFIXES.choose(&mut rng).copied().unwrap_or("plain");
    let name = NAMES.choose(&mut rng).copied().unwrap_or("stone");
    let suffix = SUFFIXES.choose(&mut rng).copied().unwrap_or("block");
    format!("{prefix}-{name}-{suffix}")
}
