use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::ReviewsApi;
use crate::errors::{ApiError, MarketError};
use crate::models::review::{NewReview, RatingStats, Review};

/// Backend phrasings that mean "this order was already reviewed". The
/// production server answers in Vietnamese.
const ALREADY_REVIEWED_MARKERS: [&str; 2] = ["đã được đánh giá", "already reviewed"];

/// An unsubmitted review as typed by the user.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub order_id: i64,
    pub rating: f64,
    pub comment: String,
}

impl ReviewDraft {
    /// Client-side checks before anything is sent: a real order id, a
    /// non-blank comment, and a rating that rounds into 1..=5.
    pub fn validate(&self) -> Result<NewReview, DomainError> {
        if self.order_id <= 0 {
            return Err(DomainError::Validation("Invalid order id".to_string()));
        }

        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(DomainError::Validation("Please write a comment".to_string()));
        }

        let rating = self.rating.round() as i32;
        if !(1..=5).contains(&rating) {
            return Err(DomainError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        Ok(NewReview { order_id: self.order_id, rating, comment: comment.to_string() })
    }
}

pub struct Reviews<A> {
    api: Arc<A>,
}

impl<A: ReviewsApi> Reviews<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Validate then POST. A rejection saying the order was already
    /// reviewed comes back as `DomainError::AlreadyReviewed` so the
    /// caller can branch; everything else passes through unchanged.
    pub async fn submit(&self, draft: &ReviewDraft) -> Result<Option<String>, MarketError> {
        let review = draft.validate()?;
        match self.api.submit(review).await {
            Ok(response) => Ok(response.message),
            Err(ApiError::Status { message, .. }) if is_already_reviewed(&message) => {
                Err(DomainError::AlreadyReviewed.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn stats(&self, user_id: i64) -> Result<RatingStats, MarketError> {
        Ok(self.api.stats(user_id).await?)
    }

    pub async fn of_user(&self, user_id: i64) -> Result<Vec<Review>, MarketError> {
        Ok(self.api.user_reviews(user_id).await?)
    }
}

fn is_already_reviewed(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ALREADY_REVIEWED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: f64, comment: &str) -> ReviewDraft {
        ReviewDraft { order_id: 7, rating, comment: comment.to_string() }
    }

    #[test]
    fn low_rating_rounds_down_and_rejects() {
        assert!(draft(0.4, "good").validate().is_err());
    }

    #[test]
    fn boundary_ratings_accept() {
        assert_eq!(draft(5.0, "good").validate().unwrap().rating, 5);
        assert_eq!(draft(1.0, "good").validate().unwrap().rating, 1);
        // 0.5 rounds up to 1
        assert_eq!(draft(0.5, "good").validate().unwrap().rating, 1);
    }

    #[test]
    fn too_high_rating_rejects() {
        assert!(draft(5.6, "good").validate().is_err());
    }

    #[test]
    fn empty_comment_rejects_at_any_rating() {
        assert!(draft(5.0, "").validate().is_err());
        assert!(draft(3.0, "   ").validate().is_err());
    }

    #[test]
    fn bad_order_id_rejects() {
        let mut d = draft(4.0, "good");
        d.order_id = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn comment_is_trimmed_into_the_payload() {
        let review = draft(3.6, "  solid desk  ").validate().unwrap();
        assert_eq!(review.comment, "solid desk");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn already_reviewed_marker_matches_both_languages() {
        assert!(is_already_reviewed("Đơn hàng đã được đánh giá"));
        assert!(is_already_reviewed("Order ALREADY REVIEWED"));
        assert!(!is_already_reviewed("Cart is empty"));
    }
}
