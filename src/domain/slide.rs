use std::fmt;

use crate::config::TOTAL_SLIDES;

/// The fixed, linear sequence of slides. Discriminants are the slide indices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum Slide {
    Intro = 0,
    Appreciation = 1,
    Gallery = 2,
    Videos = 3,
    Thoughts = 4,
    HiddenReveal = 5,
    Closing = 6,
}

impl Slide {
    pub const FIRST: Slide = Slide::Intro;
    pub const LAST: Slide = Slide::Closing;

    pub fn index(self) -> usize {
        self as usize
    }

    /// `None` for anything outside `0..TOTAL_SLIDES`
    pub fn from_index(index: usize) -> Option<Slide> {
        match index {
            0 => Some(Slide::Intro),
            1 => Some(Slide::Appreciation),
            2 => Some(Slide::Gallery),
            3 => Some(Slide::Videos),
            4 => Some(Slide::Thoughts),
            5 => Some(Slide::HiddenReveal),
            6 => Some(Slide::Closing),
            _ => None,
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slide::Intro => "Intro",
            Slide::Appreciation => "Appreciation",
            Slide::Gallery => "Gallery",
            Slide::Videos => "Videos",
            Slide::Thoughts => "Thoughts",
            Slide::HiddenReveal => "Hidden reveal",
            Slide::Closing => "Closing",
        };
        write!(f, "{} ({}/{})", name, self.index() + 1, TOTAL_SLIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iteration_matches_indices_and_total() {
        let slides: Vec<Slide> = Slide::iter().collect();
        assert_eq!(slides.len(), TOTAL_SLIDES);
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.index(), i);
            assert_eq!(Slide::from_index(i), Some(*slide));
        }
        assert_eq!(Slide::from_index(TOTAL_SLIDES), None);
    }

    #[test]
    fn first_and_last_bound_the_sequence() {
        assert_eq!(Slide::FIRST.index(), 0);
        assert_eq!(Slide::LAST.index(), TOTAL_SLIDES - 1);
        assert_eq!(Slide::LAST.to_string(), "Closing (7/7)");
    }
}
