//! Weather Markov chain.

use crate::content::Weather;
use rand::Rng;

/// Next weather from the current one, using a single uniform draw.
pub fn next_weather(current: Weather, rng: &mut impl Rng) -> Weather {
    let r: f64 = rng.gen();
    match current {
        Weather::Sunny if r < 0.2 => Weather::Rainy,
        Weather::Sunny => Weather::Sunny,
        Weather::Rainy if r < 0.15 => Weather::Stormy,
        Weather::Rainy if r < 0.65 => Weather::Sunny,
        Weather::Rainy => Weather::Rainy,
        Weather::Stormy if r < 0.7 => Weather::Rainy,
        Weather::Stormy => Weather::Stormy,
    }
}
