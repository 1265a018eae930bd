//! Round generation
//!
//! Rolls a fresh road layout and instruction. No memory of previous rounds:
//! repeats are allowed and every call is independent.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Direction, Icon, Layout, Mode, Side};
use crate::content::{ContentLibrary, ContentPool};

/// Produces random layouts and instructions from a validated content library
#[derive(Debug, Clone)]
pub struct RoundGenerator<R = Pcg32> {
    library: ContentLibrary,
    rng: R,
    /// Sessions handed out so far
    sessions: u64,
}

impl RoundGenerator<Pcg32> {
    /// Generator with a seeded PCG stream
    pub fn seeded(library: ContentLibrary, seed: u64) -> Self {
        Self::new(library, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundGenerator<R> {
    pub fn new(library: ContentLibrary, rng: R) -> Self {
        Self {
            library,
            rng,
            sessions: 0,
        }
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    /// Roll a side per direction, then an icon matching each side from the mode's pool
    pub fn generate_layout(&mut self, mode: Mode) -> Layout {
        let forward = self.random_side();
        let left = self.random_side();
        let right = self.random_side();

        let pool = self.library.pool(mode);
        Layout {
            forward,
            forward_icon: pick_icon(pool, forward, &mut self.rng),
            left,
            left_icon: pick_icon(pool, left, &mut self.rng),
            right,
            right_icon: pick_icon(pool, right, &mut self.rng),
        }
    }

    /// Number a new session; never 0, which is the title screen
    pub fn begin_session(&mut self) -> u64 {
        self.sessions += 1;
        self.sessions
    }

    /// Roll the direction the player must take
    pub fn generate_instruction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }

    fn random_side(&mut self) -> Side {
        if self.rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

fn pick_icon<R: Rng + ?Sized>(pool: &ContentPool, side: Side, rng: &mut R) -> Icon {
    // Library construction rejects empty sides
    pool.pick_random(side, rng)
        .cloned()
        .unwrap_or_else(|| unreachable!("validated pool has no {side} items"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::COUNTRIES;

    fn generator(seed: u64) -> RoundGenerator {
        RoundGenerator::seeded(ContentLibrary::standard().unwrap(), seed)
    }

    #[test]
    fn test_icons_match_sides() {
        let mut rounds = generator(1);
        for mode in Mode::ALL {
            for _ in 0..50 {
                let layout = rounds.generate_layout(mode);
                for dir in Direction::ALL {
                    let icon = layout.icon(dir);
                    let side = layout.side(dir);
                    match mode {
                        Mode::Easy => assert_eq!(icon.label, if side == Side::Left { "Left" } else { "Right" }),
                        _ => {
                            let country = COUNTRIES.iter().find(|c| c.name == icon.label).unwrap();
                            assert_eq!(country.side, side);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_sides_and_instructions_cover_all_values() {
        let mut rounds = generator(42);
        let mut seen_sides = std::collections::HashSet::new();
        let mut seen_dirs = std::collections::HashSet::new();
        for _ in 0..200 {
            let layout = rounds.generate_layout(Mode::Easy);
            seen_sides.insert((layout.forward, layout.left, layout.right));
            seen_dirs.insert(rounds.generate_instruction());
        }
        // Sides are independent, so all eight combinations turn up
        assert_eq!(seen_sides.len(), 8);
        assert_eq!(seen_dirs.len(), 3);
    }

    #[test]
    fn test_sessions_are_numbered_from_one() {
        let mut rounds = generator(5);
        assert_eq!(rounds.begin_session(), 1);
        assert_eq!(rounds.begin_session(), 2);
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = generator(99);
        let mut b = generator(99);
        for _ in 0..20 {
            assert_eq!(a.generate_layout(Mode::Hard), b.generate_layout(Mode::Hard));
            assert_eq!(a.generate_instruction(), b.generate_instruction());
        }
    }
}
