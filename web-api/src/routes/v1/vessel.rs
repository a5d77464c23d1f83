use actix_web::web;
use chrono::{DateTime, Utc};
use flotilla_core::{Coordinates, VesselId};
use serde::{Deserialize, Serialize};
use tracing::{Level, event};
use utoipa::{IntoParams, ToSchema};

use crate::{VesselSource, error::ApiError, response::Response};

#[derive(Debug, Deserialize, IntoParams)]
pub struct VesselsAtTimeParameters {
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/vessels",
    responses(
        (status = 200, description = "the current live fleet snapshot", body = [Vessel]),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(source))]
pub async fn vessels<T: VesselSource>(
    source: web::Data<T>,
) -> Result<Response<Vec<Vessel>>, ApiError> {
    let vessels = source
        .vessels()
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to retrieve vessels: {:?}", e);
            ApiError::InternalServerError
        })?
        .into_iter()
        .map(Vessel::from)
        .collect();

    Ok(Response::new(vessels))
}

#[utoipa::path(
    get,
    path = "/vessels/latest",
    responses(
        (
            status = 200,
            description = "the fleet snapshot after advancing the simulation one step",
            body = [Vessel]
        ),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(source))]
pub async fn latest_vessels<T: VesselSource>(
    source: web::Data<T>,
) -> Result<Response<Vec<Vessel>>, ApiError> {
    let vessels = source
        .fetch_vessels()
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to fetch vessels: {:?}", e);
            ApiError::InternalServerError
        })?
        .into_iter()
        .map(Vessel::from)
        .collect();

    Ok(Response::new(vessels))
}

#[utoipa::path(
    get,
    path = "/vessels_at_time",
    params(VesselsAtTimeParameters),
    responses(
        (
            status = 200,
            description = "the fleet reconstructed from history at the given timestamp",
            body = [Vessel]
        ),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
        (status = 400, description = "invalid parameters were provided", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(source))]
pub async fn vessels_at_time<T: VesselSource>(
    source: web::Data<T>,
    params: web::Query<VesselsAtTimeParameters>,
) -> Result<Response<Vec<Vessel>>, ApiError> {
    let vessels = source
        .vessels_at_time(params.timestamp)
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to retrieve vessels at time: {:?}", e);
            ApiError::InternalServerError
        })?
        .into_iter()
        .map(Vessel::from)
        .collect();

    Ok(Response::new(vessels))
}

#[utoipa::path(
    get,
    path = "/vessel_track/{vessel_id}",
    params(
        ("vessel_id" = i64, Path, description = "id of the vessel to return the trail for"),
    ),
    responses(
        (
            status = 200,
            description = "the live trail of the given vessel, empty for unknown ids",
            body = [TrackPosition]
        ),
        (status = 500, description = "an internal error occured", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip(source))]
pub async fn vessel_track<T: VesselSource>(
    source: web::Data<T>,
    vessel_id: web::Path<i64>,
) -> Result<Response<Vec<TrackPosition>>, ApiError> {
    let track = source
        .vessel_track(VesselId::new(vessel_id.into_inner()))
        .await
        .map_err(|e| {
            event!(Level::ERROR, "failed to retrieve vessel track: {:?}", e);
            ApiError::InternalServerError
        })?
        .into_iter()
        .map(TrackPosition::from)
        .collect();

    Ok(Response::new(track))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: VesselStatus,
    pub speed: f64,
    pub heading: f64,
    pub last_update: DateTime<Utc>,
    pub tracker_id: String,
    pub trajectory: Vec<TrackPosition>,
}

impl From<flotilla_core::Vessel> for Vessel {
    fn from(value: flotilla_core::Vessel) -> Self {
        Vessel {
            id: value.id.into_inner(),
            name: value.name,
            location: value.location,
            latitude: value.position.latitude,
            longitude: value.position.longitude,
            status: value.status.into(),
            speed: value.speed,
            heading: value.heading,
            last_update: value.last_update,
            tracker_id: value.tracker_id.into_inner(),
            trajectory: value
                .trajectory
                .into_iter()
                .map(TrackPosition::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for TrackPosition {
    fn from(value: Coordinates) -> Self {
        TrackPosition {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VesselStatus {
    Sailing,
    Anchored,
    Docked,
}

impl From<flotilla_core::VesselStatus> for VesselStatus {
    fn from(value: flotilla_core::VesselStatus) -> Self {
        match value {
            flotilla_core::VesselStatus::Sailing => VesselStatus::Sailing,
            flotilla_core::VesselStatus::Anchored => VesselStatus::Anchored,
            flotilla_core::VesselStatus::Docked => VesselStatus::Docked,
        }
    }
}
