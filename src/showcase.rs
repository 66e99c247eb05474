use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::carousel::Carousel;
use crate::catalog::{self, GALLERY, HERO_IMAGES, REVIEWS, SIGNATURE_DISHES};
use crate::data::{MenuItem, Photo, Review};
use crate::error::SiteError;
use crate::reviews;

/// The auto-advancing carousels of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Showcase {
    Hero,
    Dishes,
    Photos,
    Reviews,
}

/// Thumbnails shown on each side of the current gallery photo.
pub const THUMB_RADIUS: usize = 2;

impl Showcase {
    pub const ALL: [Showcase; 4] = [
        Showcase::Hero,
        Showcase::Dishes,
        Showcase::Photos,
        Showcase::Reviews,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Dishes => "dishes",
            Self::Photos => "photos",
            Self::Reviews => "reviews",
        }
    }

    pub const fn period(self) -> Duration {
        match self {
            Self::Hero | Self::Dishes => Duration::from_millis(6000),
            Self::Photos => Duration::from_millis(5500),
            Self::Reviews => Duration::from_millis(5000),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Hero => HERO_IMAGES.len(),
            Self::Dishes => SIGNATURE_DISHES.len(),
            Self::Photos => GALLERY.len(),
            Self::Reviews => reviews::featured(&REVIEWS).len(),
        }
    }

    pub fn slide(self, index: usize) -> Option<Slide> {
        match self {
            Self::Hero => HERO_IMAGES.get(index).map(|photo| Slide::Image { photo }),
            Self::Photos => GALLERY.get(index).map(|photo| Slide::Image { photo }),
            Self::Dishes => {
                let &(id, tag) = SIGNATURE_DISHES.get(index)?;
                catalog::item(id).map(|item| Slide::Dish { item, tag })
            }
            Self::Reviews => reviews::featured(&REVIEWS)
                .get(index)
                .map(|&review| Slide::Review { review }),
        }
    }

    pub fn slides(self) -> Vec<Slide> {
        (0..self.len()).filter_map(|index| self.slide(index)).collect()
    }

    /// Auto-advancing carousel positioned on `start`.
    pub fn open(self, start: usize, now: Instant) -> Result<Carousel, SiteError> {
        let mut carousel = Carousel::new(self.len())
            .ok_or(SiteError::SlideOutOfRange {
                index: start,
                len: 0,
            })?
            .with_autoplay(self.period(), now);
        carousel.jump(start, now)?;
        Ok(carousel)
    }
}

impl fmt::Display for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Showcase {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|showcase| showcase.name() == s)
            .ok_or_else(|| SiteError::UnknownShowcase(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Slide {
    Image {
        photo: &'static Photo,
    },
    Dish {
        item: &'static MenuItem,
        tag: &'static str,
    },
    Review {
        review: &'static Review,
    },
}
