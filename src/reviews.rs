//! Review content shown on the carousel slides.

use serde::{Deserialize, Serialize};

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// A single testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    MAX_RATING
}

impl Review {
    pub fn new(author: &str, role: Option<&str>, text: &str, rating: u8) -> Self {
        Self {
            author: author.to_string(),
            role: role.map(str::to_string),
            text: text.to_string(),
            rating,
        }
    }

    /// Star string for the rating, clamped to 0..=5 (e.g. "★★★★☆").
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }

    /// "Author, Role" or just "Author".
    pub fn byline(&self) -> String {
        match &self.role {
            Some(role) if !role.trim().is_empty() => format!("{}, {}", self.author, role),
            _ => self.author.clone(),
        }
    }
}

/// Built-in testimonials used when the config file lists none.
pub fn default_reviews() -> Vec<Review> {
    vec![
        Review::new(
            "Maya Chen",
            Some("Product Lead"),
            "The redesign landed on time and the new site feels fast on every device. \
             Our sign-ups doubled in the first month.",
            5,
        ),
        Review::new(
            "Jonas Berg",
            Some("Founder"),
            "Clear communication from the first call to launch. Every detail we asked \
             for showed up in the final build.",
            5,
        ),
        Review::new(
            "Priya Nair",
            Some("Marketing Director"),
            "Beautiful animations that never get in the way of the content. Visitors \
             stay longer and actually read the case studies.",
            4,
        ),
        Review::new(
            "Luis Ortega",
            None,
            "Quick turnaround, thoughtful suggestions, and a codebase our own team can \
             maintain. Would hire again.",
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_clamp() {
        let review = Review::new("A", None, "t", 9);
        assert_eq!(review.stars(), "★★★★★");
        let review = Review::new("A", None, "t", 3);
        assert_eq!(review.stars(), "★★★☆☆");
    }

    #[test]
    fn test_byline() {
        assert_eq!(Review::new("A", Some("CEO"), "t", 5).byline(), "A, CEO");
        assert_eq!(Review::new("A", Some("  "), "t", 5).byline(), "A");
        assert_eq!(Review::new("A", None, "t", 5).byline(), "A");
    }

    #[test]
    fn test_default_reviews_not_empty() {
        assert_eq!(default_reviews().len(), 4);
    }
}
