//! Deterministic procedural star names.
//!
//! [`name_of`] maps a seed to a raw `adjective_noun` name; [`display_name`]
//! turns it into the `Adjective-Noun` form stored on stars.

const ADJECTIVES: &[&str] = &[
    "amber", "ancient", "azure", "bold", "brave", "bright", "calm", "cold", "crimson", "distant",
    "dusky", "eager", "ember", "faint", "fierce", "frozen", "gentle", "gilded", "glowing",
    "golden", "hidden", "hollow", "icy", "idle", "jade", "keen", "lone", "lucid", "misty",
    "molten", "noble", "pale", "proud", "quiet", "radiant", "restless", "silent", "silver",
    "solemn", "swift", "tranquil", "twin", "vast", "velvet", "violet", "wandering", "wild",
    "young",
];

const NOUNS: &[&str] = &[
    "anvil", "arrow", "beacon", "comet", "crown", "delta", "drift", "eagle", "echo", "falcon",
    "forge", "garden", "gate", "harbor", "haven", "heron", "horizon", "lantern", "lotus",
    "meadow", "mirror", "nomad", "oracle", "orchid", "pillar", "pilgrim", "raven", "reef",
    "river", "sentinel", "shore", "spire", "stag", "summit", "tempest", "thistle", "throne",
    "tide", "vale", "vault", "veil", "warden", "willow", "wolf", "wren", "zenith",
];

/// Separator between words in raw names.
pub const RAW_SEPARATOR: char = '_';
/// Separator between words in display names.
pub const DISPLAY_SEPARATOR: &str = "-";

/// Raw `adjective_noun` name for `seed`. The same seed always yields the same name.
pub fn name_of(seed: u64) -> String {
    let mixed = mix_u64(seed);
    let adjective = ADJECTIVES[(mixed % ADJECTIVES.len() as u64) as usize];
    let noun = NOUNS[((mixed >> 32) % NOUNS.len() as u64) as usize];
    format!("{adjective}{RAW_SEPARATOR}{noun}")
}

/// Replaces raw separators and capitalizes every word: `ancient_river` -> `Ancient-River`.
pub fn display_name(raw: &str) -> String {
    raw.split(RAW_SEPARATOR)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// SplitMix64 finalizer.
#[inline]
pub(crate) fn mix_u64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
