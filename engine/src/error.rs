use flotilla_core::DateRangeError;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid mission window"))]
    MissionWindow {
        #[snafu(implicit)]
        location: Location,
        source: DateRangeError,
    },
    #[snafu(display("Seed roster contained no vessels"))]
    EmptyRoster {
        #[snafu(implicit)]
        location: Location,
    },
}
