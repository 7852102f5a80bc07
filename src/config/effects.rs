//! Cosmetic parameters for the hidden-reveal heart burst.
//! None of these are part of the navigation contract.

pub struct BurstConfig {
    pub particle_count: usize,
    /// Horizontal spread in points, total width
    pub spread: f32,
    /// How far particles rise before fading
    pub rise: f32,
    pub lifetime_secs: f32,
    pub min_size: f32,
    pub max_size: f32,
}

pub static BURST: BurstConfig = BurstConfig {
    particle_count: 45,
    spread: 700.0,
    rise: 420.0,
    lifetime_secs: 3.2,
    min_size: 12.0,
    max_size: 32.0,
};
