#![deny(warnings)]
#![deny(rust_2018_idioms)]

use engine::VesselStateEngine;
use flotilla_core::VesselStatePort;
use routes::v1;
use utoipa::OpenApi;

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;

/// Backing state source for the HTTP layer.
pub trait VesselSource: VesselStatePort {}

impl VesselSource for VesselStateEngine {}

#[derive(OpenApi)]
#[openapi(
    paths(
        v1::vessel::vessels,
        v1::vessel::latest_vessels,
        v1::vessel::vessels_at_time,
        v1::vessel::vessel_track,
        v1::mission::mission,
    ),
    components(
        schemas(
            error::ErrorResponse,
            error::ApiError,
            v1::vessel::Vessel,
            v1::vessel::VesselStatus,
            v1::vessel::TrackPosition,
            v1::mission::MissionDateRange,
        )
    )
)]
pub struct ApiDoc;
