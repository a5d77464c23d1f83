use actix_web::web;
use chrono::{DateTime, Utc};
use flotilla_core::DateRange;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};
use utoipa::ToSchema;

use crate::{VesselSource, error::ApiError, response::Response};

#[utoipa::path(
    get,
    path = "/mission",
    responses(
        (
            status = 200,
            description = "the fixed mission window backing the playback timeline",
            body = MissionDateRange
        ),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(source))]
pub async fn mission<T: VesselSource>(
    source: web::Data<T>,
) -> Result<Response<MissionDateRange>, ApiError> {
    let range = source.mission_date_range().await.map_err(|e| {
        event!(Level::ERROR, "failed to retrieve mission date range: {:?}", e);
        ApiError::InternalServerError
    })?;

    Ok(Response::new(range.into()))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionDateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<DateRange> for MissionDateRange {
    fn from(value: DateRange) -> Self {
        MissionDateRange {
            start: value.start(),
            end: value.end(),
        }
    }
}
