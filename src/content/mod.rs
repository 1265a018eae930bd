//! Side-labelled content shown next to each turn
//!
//! Every mode draws icons from its own pool. A pool must hold at least one
//! item per side; this is checked once when the library is built.

pub mod countries;

pub use countries::{COUNTRIES, Country, countries_by_side};

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::consts::{LEFT_ICON_URL, RIGHT_ICON_URL};
use crate::sim::{Icon, Mode, Side};

/// Content authoring mistakes, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content pool for {mode} mode has no {side} items")]
    EmptyPool { mode: Mode, side: Side },
}

/// Icons for one mode, split by driving side
#[derive(Debug, Clone, Default)]
pub struct ContentPool {
    left: Vec<Icon>,
    right: Vec<Icon>,
}

impl ContentPool {
    pub fn new(left: Vec<Icon>, right: Vec<Icon>) -> Self {
        Self { left, right }
    }

    /// Build a pool from tagged icons
    pub fn from_tagged(items: impl IntoIterator<Item = (Side, Icon)>) -> Self {
        let mut pool = Self::default();
        for (side, icon) in items {
            match side {
                Side::Left => pool.left.push(icon),
                Side::Right => pool.right.push(icon),
            }
        }
        pool
    }

    /// Plain "Left" / "Right" signs
    pub fn simple() -> Self {
        Self::new(
            vec![Icon::new("Left", LEFT_ICON_URL)],
            vec![Icon::new("Right", RIGHT_ICON_URL)],
        )
    }

    /// Flags of every country whose code passes `filter`
    pub fn countries(filter: impl Fn(&Country) -> bool) -> Self {
        Self::from_tagged(
            COUNTRIES
                .iter()
                .filter(|c| filter(*c))
                .map(|c| (c.side, Icon::new(c.name, c.image_url()))),
        )
    }

    pub fn items(&self, side: Side) -> &[Icon] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw an icon for `side` uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Option<&Icon> {
        self.items(side).choose(rng)
    }

    fn validate(&self, mode: Mode) -> Result<(), ContentError> {
        for side in Side::ALL {
            if self.items(side).is_empty() {
                return Err(ContentError::EmptyPool { mode, side });
            }
        }
        Ok(())
    }
}

/// Validated pools for every mode
///
/// Fields stay private so a library only exists through `new`, which is what
/// lets round generation treat an empty side as unreachable.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    easy: ContentPool,
    medium: ContentPool,
    hard: ContentPool,
}

impl ContentLibrary {
    /// Build a library, rejecting any pool with an empty side
    pub fn new(
        easy: ContentPool,
        medium: ContentPool,
        hard: ContentPool,
    ) -> Result<Self, ContentError> {
        easy.validate(Mode::Easy)?;
        medium.validate(Mode::Medium)?;
        hard.validate(Mode::Hard)?;
        log::debug!(
            "Content pools: easy={} medium={} hard={}",
            easy.len(),
            medium.len(),
            hard.len()
        );
        Ok(Self { easy, medium, hard })
    }

    /// The stock library: signs for easy, well-known flags for medium, every flag for hard
    pub fn standard() -> Result<Self, ContentError> {
        Self::new(
            ContentPool::simple(),
            ContentPool::countries(|c| countries::WELL_KNOWN.contains(&c.code)),
            ContentPool::countries(|_| true),
        )
    }

    pub fn pool(&self, mode: Mode) -> &ContentPool {
        match mode {
            Mode::Easy => &self.easy,
            Mode::Medium => &self.medium,
            Mode::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_standard_library_is_valid() {
        let library = ContentLibrary::standard().unwrap();
        assert_eq!(library.pool(Mode::Easy).len(), 2);
        assert!(library.pool(Mode::Medium).len() < library.pool(Mode::Hard).len());
        assert_eq!(library.pool(Mode::Hard).len(), COUNTRIES.len());
    }

    #[test]
    fn test_empty_side_is_rejected() {
        let lopsided = ContentPool::new(vec![Icon::new("Left", LEFT_ICON_URL)], Vec::new());
        let err = ContentLibrary::new(ContentPool::simple(), lopsided, ContentPool::simple())
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::EmptyPool {
                mode: Mode::Medium,
                side: Side::Right
            }
        );
        assert_eq!(err.to_string(), "content pool for medium mode has no right items");
    }

    #[test]
    fn test_pick_random_matches_side() {
        let library = ContentLibrary::standard().unwrap();
        let pool = library.pool(Mode::Hard);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let icon = pool.pick_random(Side::Left, &mut rng).unwrap();
            let country = COUNTRIES.iter().find(|c| c.name == icon.label).unwrap();
            assert_eq!(country.side, Side::Left);
        }
    }

    #[test]
    fn test_medium_pool_sides() {
        let library = ContentLibrary::standard().unwrap();
        let pool = library.pool(Mode::Medium);
        assert!(pool.items(Side::Left).iter().any(|i| i.label == "Japan"));
        assert!(pool.items(Side::Right).iter().any(|i| i.label == "France"));
        assert!(!pool.items(Side::Right).iter().any(|i| i.label == "Japan"));
    }
}
