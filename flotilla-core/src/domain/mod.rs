mod date_range;
mod history;
mod vessel;

pub use date_range::*;
pub use history::*;
pub use vessel::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
