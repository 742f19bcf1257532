//! Accent color picked after each successful search
//!
//! Purely cosmetic. The color comes from an [`AccentSource`] so the random
//! pick can be switched off (`--no-accent`) or seeded in tests without
//! touching the rest of the application state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ratatui::style::Color;

/// An RGB accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Accent {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex notation, e.g. `#FF5733`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Terminal color for this accent
    pub fn color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Accent used before the first successful search and when accents are disabled
pub const NEUTRAL: Accent = Accent::rgb(0xFF, 0xFF, 0xFF);

/// The fixed palette random accents are drawn from
pub const PALETTE: [Accent; 8] = [
    Accent::rgb(0xFF, 0x57, 0x33),
    Accent::rgb(0x33, 0x6D, 0xFF),
    Accent::rgb(0x33, 0xFF, 0x57),
    Accent::rgb(0xFF, 0x33, 0xE0),
    Accent::rgb(0xFF, 0xA8, 0x33),
    Accent::rgb(0x33, 0x97, 0xFF),
    Accent::rgb(0x33, 0x39, 0xFF),
    Accent::rgb(0xAA, 0x33, 0xFF),
];

/// Produces the accent to show after a successful search
pub trait AccentSource: Send {
    fn next_accent(&mut self) -> Accent;
}

/// Uniform random pick from [`PALETTE`]
#[derive(Debug)]
pub struct RandomAccent {
    rng: StdRng,
}

impl RandomAccent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence, for tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccent {
    fn default() -> Self {
        Self::new()
    }
}

impl AccentSource for RandomAccent {
    fn next_accent(&mut self) -> Accent {
        // PALETTE is a non-empty const array.
        *PALETTE.choose(&mut self.rng).unwrap_or(&NEUTRAL)
    }
}

/// Always returns the same accent
#[derive(Debug, Clone, Copy)]
pub struct FixedAccent(pub Accent);

impl AccentSource for FixedAccent {
    fn next_accent(&mut self) -> Accent {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex_values() {
        let hex: Vec<String> = PALETTE.iter().map(Accent::hex).collect();
        assert_eq!(
            hex,
            vec![
                "#FF5733", "#336DFF", "#33FF57", "#FF33E0", "#FFA833", "#3397FF", "#3339FF",
                "#AA33FF"
            ]
        );
    }

    #[test]
    fn test_neutral_is_white() {
        assert_eq!(NEUTRAL.hex(), "#FFFFFF");
        assert_eq!(NEUTRAL.color(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_random_accent_stays_in_palette() {
        let mut source = RandomAccent::seeded(42);
        for _ in 0..100 {
            assert!(PALETTE.contains(&source.next_accent()));
        }
    }

    #[test]
    fn test_random_accent_reaches_every_color() {
        let mut source = RandomAccent::seeded(7);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            let accent = source.next_accent();
            if let Some(i) = PALETTE.iter().position(|c| *c == accent) {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s), "every palette entry should appear");
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RandomAccent::seeded(1);
        let mut b = RandomAccent::seeded(1);
        for _ in 0..10 {
            assert_eq!(a.next_accent(), b.next_accent());
        }
    }

    #[test]
    fn test_fixed_accent() {
        let mut source = FixedAccent(PALETTE[3]);
        assert_eq!(source.next_accent(), PALETTE[3]);
        assert_eq!(source.next_accent(), PALETTE[3]);
    }
}
