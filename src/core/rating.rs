//! Tool ratings
//!
//! One vote per tool per client, stored under `rating_<toolId>`. The public
//! summary is a deterministic baseline per tool with the client's own vote
//! folded in; there is no server-side aggregate.

use crate::shared::error::{AppError, AppResult};
use log::{debug, info, warn};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod store;

use store::KeyValueStore;

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

pub fn rating_key(tool_id: &str) -> String {
    format!("rating_{}", tool_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingSummary {
    /// Mean stars, rounded to one decimal
    pub average: f64,
    pub count: u32,
}

fn round_one_decimal(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

impl RatingSummary {
    /// Summary after one more vote: `((average * count) + stars) / (count + 1)`
    pub fn with_vote(&self, stars: u8) -> RatingSummary {
        let count = self.count + 1;
        let total = self.average * f64::from(self.count) + f64::from(stars);
        RatingSummary {
            average: round_one_decimal(total / f64::from(count)),
            count,
        }
    }

    /// Stable per-tool starting point, 4.0..=4.9 over 50..1000 votes
    pub fn baseline(tool_id: &str) -> RatingSummary {
        let digest = md5::compute(tool_id.as_bytes()).0;
        let tenths = f64::from(digest[0] % 10);
        let count = 50 + u32::from(u16::from_be_bytes([digest[1], digest[2]])) % 950;
        RatingSummary {
            average: round_one_decimal(4.0 + tenths / 10.0),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateOutcome {
    /// False when a vote for the tool already existed; nothing was written
    pub accepted: bool,
    pub summary: RatingSummary,
    pub user_rating: Option<u8>,
}

fn parse_stars(raw: &str, key: &str) -> Option<u8> {
    match raw.trim().parse::<u8>() {
        Ok(stars) if (MIN_STARS..=MAX_STARS).contains(&stars) => Some(stars),
        _ => {
            warn!("[Rating] Ignoring invalid stored value {:?} for {}", raw, key);
            None
        }
    }
}

pub struct RatingService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RatingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The client's stored vote. Corrupt entries read as "no vote".
    pub fn user_rating(&self, tool_id: &str) -> AppResult<Option<u8>> {
        let key = rating_key(tool_id);
        Ok(self.store.get(&key)?.and_then(|raw| parse_stars(&raw, &key)))
    }

    pub fn summary(&self, tool_id: &str) -> AppResult<RatingSummary> {
        let baseline = RatingSummary::baseline(tool_id);
        Ok(match self.user_rating(tool_id)? {
            Some(stars) => baseline.with_vote(stars),
            None => baseline,
        })
    }

    /// Record a vote unless one exists already.
    ///
    /// Stars outside 1..=5 are a validation error; a repeat vote is a
    /// rejected no-op rather than an error.
    pub fn rate(&self, tool_id: &str, stars: u8) -> AppResult<RateOutcome> {
        if !(MIN_STARS..=MAX_STARS).contains(&stars) {
            return Err(AppError::Validation(format!(
                "Rating must be between {} and {} stars, got {}",
                MIN_STARS, MAX_STARS, stars
            )));
        }

        // Check and write are a single store operation
        let key = rating_key(tool_id);
        if let Some(raw) = self.store.insert_if_absent(&key, &stars.to_string())? {
            match parse_stars(&raw, &key) {
                Some(existing) => {
                    debug!("[Rating] {} already rated {} stars, ignoring", tool_id, existing);
                    return Ok(RateOutcome {
                        accepted: false,
                        summary: RatingSummary::baseline(tool_id).with_vote(existing),
                        user_rating: Some(existing),
                    });
                }
                None => self.store.set(&key, &stars.to_string())?,
            }
        }
        info!("[Rating] {} rated {} stars", tool_id, stars);

        Ok(RateOutcome {
            accepted: true,
            summary: RatingSummary::baseline(tool_id).with_vote(stars),
            user_rating: Some(stars),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::store::{MemoryStore, RedbStore};
    use super::*;

    #[test]
    fn test_vote_updates_average() {
        let summary = RatingSummary { average: 4.0, count: 10 }.with_vote(5);
        assert_eq!(summary, RatingSummary { average: 4.1, count: 11 });
    }

    #[test]
    fn test_baseline_is_deterministic_and_bounded() {
        let a = RatingSummary::baseline("bmi");
        assert_eq!(a, RatingSummary::baseline("bmi"));
        for id in ["bmi", "loan", "convert-length", "calculator"] {
            let s = RatingSummary::baseline(id);
            assert!((4.0..=4.9).contains(&s.average), "{} -> {}", id, s.average);
            assert!((50..1000).contains(&s.count));
        }
    }

    #[test]
    fn test_second_vote_rejected() {
        let service = RatingService::new(MemoryStore::new());
        let first = service.rate("bmi", 5).unwrap();
        assert!(first.accepted);
        assert_eq!(first.user_rating, Some(5));
        assert_eq!(first.summary.count, RatingSummary::baseline("bmi").count + 1);

        let second = service.rate("bmi", 1).unwrap();
        assert!(!second.accepted);
        assert_eq!(second.user_rating, Some(5));
        assert_eq!(second.summary, first.summary);
    }

    #[test]
    fn test_out_of_range_stars() {
        let service = RatingService::new(MemoryStore::new());
        assert!(matches!(service.rate("bmi", 0), Err(AppError::Validation(_))));
        assert!(matches!(service.rate("bmi", 6), Err(AppError::Validation(_))));
        assert_eq!(service.user_rating("bmi").unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_reads_as_no_vote() {
        let store = MemoryStore::new();
        store.set(&rating_key("loan"), "lots").unwrap();
        let service = RatingService::new(store);
        assert_eq!(service.user_rating("loan").unwrap(), None);
        assert_eq!(service.summary("loan").unwrap(), RatingSummary::baseline("loan"));

        let outcome = service.rate("loan", 4).unwrap();
        assert!(outcome.accepted);
        assert_eq!(service.user_rating("loan").unwrap(), Some(4));
    }

    #[test]
    fn test_concurrent_votes_record_once() {
        let dir = tempfile::tempdir().unwrap();
        let service = RatingService::new(RedbStore::open(dir.path()).unwrap());

        let accepted: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=5u8)
                .map(|stars| {
                    let service = &service;
                    scope.spawn(move || service.rate("calculator", stars).unwrap().accepted)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(accepted.iter().filter(|a| **a).count(), 1);
        assert!(service.user_rating("calculator").unwrap().is_some());
    }
}
