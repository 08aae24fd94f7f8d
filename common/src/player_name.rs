use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Golden", "Wild", "Noble",
    "Fierce", "Gentle", "Quick", "Wise", "Bold", "Proud", "Cunning", "Sly",
];

const NOUNS: &[&str] = &[
    "Python", "Cobra", "Viper", "Mamba", "Adder", "Boa", "Krait", "Taipan",
    "Asp", "Racer", "Sidewinder", "Anaconda", "Garter", "Rattler", "Kingsnake", "Copperhead",
];

/// Name recorded with a high score when the config does not provide one.
pub fn generate_player_name() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{} {}", adjective, noun)
}
