//! Rating commands

use crate::core::catalog::Catalog;
use crate::core::rating::store::{default_data_dir, KeyValueStore, RedbStore};
use crate::core::rating::{RatingService, RatingSummary};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::{RateToolRequest, RateToolResponse};

/// Rating service over the on-disk store, honouring `storage.data_dir`
pub fn open_rating_service(settings: &AppSettings) -> AppResult<RatingService<RedbStore>> {
    let dir = match settings.data_dir() {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    Ok(RatingService::new(RedbStore::open(&dir)?))
}

fn ensure_tool(catalog: &Catalog, tool_id: &str) -> AppResult<()> {
    catalog
        .get(tool_id)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Tool '{}'", tool_id)))
}

pub fn get_rating<S: KeyValueStore>(
    catalog: &Catalog,
    ratings: &RatingService<S>,
    tool_id: &str,
) -> AppResult<RatingSummary> {
    ensure_tool(catalog, tool_id)?;
    ratings.summary(tool_id)
}

pub fn rate_tool<S: KeyValueStore>(
    catalog: &Catalog,
    ratings: &RatingService<S>,
    request: &RateToolRequest,
) -> AppResult<RateToolResponse> {
    ensure_tool(catalog, &request.tool_id)?;
    let outcome = ratings.rate(&request.tool_id, request.stars)?;
    Ok(RateToolResponse {
        accepted: outcome.accepted,
        summary: outcome.summary,
        user_rating: outcome.user_rating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rating::store::MemoryStore;
    use tempfile::tempdir;

    fn request(tool_id: &str, stars: u8) -> RateToolRequest {
        RateToolRequest { tool_id: tool_id.to_string(), stars }
    }

    #[test]
    fn test_rate_once() {
        let ratings = RatingService::new(MemoryStore::new());
        let catalog = Catalog::global();
        assert!(rate_tool(catalog, &ratings, &request("loan", 4)).unwrap().accepted);
        let again = rate_tool(catalog, &ratings, &request("loan", 2)).unwrap();
        assert!(!again.accepted);
        assert_eq!(again.user_rating, Some(4));
        assert_eq!(get_rating(catalog, &ratings, "loan").unwrap(), again.summary);
    }

    #[test]
    fn test_unknown_tool() {
        let ratings = RatingService::new(MemoryStore::new());
        assert!(matches!(
            rate_tool(Catalog::global(), &ratings, &request("ghost", 5)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_open_service_in_configured_dir() {
        let dir = tempdir().unwrap();
        let mut settings = AppSettings::default();
        settings.storage.data_dir = Some(dir.path().to_string_lossy().into_owned());
        {
            let ratings = open_rating_service(&settings).unwrap();
            ratings.rate("bmi", 3).unwrap();
        }
        let ratings = open_rating_service(&settings).unwrap();
        assert_eq!(ratings.user_rating("bmi").unwrap(), Some(3));
    }
}
