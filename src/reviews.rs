use serde::Serialize;

use crate::data::Review;

pub const FEATURED_LIMIT: usize = 5;
/// Reviews up to this many characters are too short to feature.
pub const FEATURED_MIN_CHARS: usize = 50;
/// Reviews shown in the grid before "show all".
pub const GRID_PREVIEW: usize = 9;

/// Long-form reviews for the rotating quote at the top of the section.
pub fn featured(reviews: &[Review]) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|review| review.text.chars().count() > FEATURED_MIN_CHARS)
        .take(FEATURED_LIMIT)
        .collect()
}

pub fn grid(reviews: &[Review], show_all: bool) -> &[Review] {
    if show_all {
        reviews
    } else {
        &reviews[..reviews.len().min(GRID_PREVIEW)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarCount {
    pub stars: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub total: usize,
    /// five stars first
    pub rows: Vec<StarCount>,
}

impl Distribution {
    /// Bar width in percent, zero for an empty distribution.
    pub fn share(&self, count: usize) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            count as f32 * 100.0 / self.total as f32
        }
    }
}

pub fn distribution(reviews: &[Review]) -> Distribution {
    let rows = (1..=5u8)
        .rev()
        .map(|stars| StarCount {
            stars,
            count: reviews.iter().filter(|r| r.rating == stars).count(),
        })
        .collect();
    Distribution {
        total: reviews.len(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::REVIEWS;

    #[test]
    fn featured_reviews_are_long_and_capped() {
        let featured = featured(&REVIEWS);
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|r| r.text.chars().count() > 50));
        assert_eq!(
            featured.iter().map(|r| r.id).collect::<Vec<_>>(),
            [1, 3, 5, 6, 7]
        );
    }

    #[test]
    fn distribution_counts_every_review() {
        let distribution = distribution(&REVIEWS);
        assert_eq!(distribution.total, 18);
        let counts: Vec<_> = distribution.rows.iter().map(|row| (row.stars, row.count)).collect();
        assert_eq!(counts, [(5, 16), (4, 1), (3, 1), (2, 0), (1, 0)]);
        assert_eq!(distribution.share(9), 50.0);
    }

    #[test]
    fn empty_distribution_has_no_width() {
        let distribution = distribution(&[]);
        assert_eq!(distribution.share(0), 0.0);
    }

    #[test]
    fn grid_preview() {
        assert_eq!(grid(&REVIEWS, false).len(), GRID_PREVIEW);
        assert_eq!(grid(&REVIEWS, true).len(), REVIEWS.len());
        assert!(grid(&REVIEWS[..3], false).len() == 3);
    }
}
