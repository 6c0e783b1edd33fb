// crates/heritage-core/src/model/mod.rs
pub mod dataset;
pub mod flatten;
mod lenient;
pub mod site;
pub mod value;

pub use dataset::{Dataset, DatasetMetadata, HeritageDb};
pub use flatten::{flatten, FlatRow, FlattenStyle};
pub use site::{
    Accessibility, Address, Contact, Coordinates, Description, Features, Image, Images, Location,
    NearbyAttraction, OpeningTimes, SeasonalHours, Site, StandardHours, TourOption,
    VisitingInformation, WheelchairAccess,
};
pub use value::{FreeMap, FreeValue};
