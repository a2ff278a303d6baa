mod config;
mod definition;
mod listing;
mod platform;

pub use self::config::{ParameterFile, ReportParameterSet, ReportParameters};
pub use self::definition::{
    ByConnection, CONNECTION_TYPE, DATA_SOURCE_NAME, VIRTUAL_SERVER_NAME, live_connection_string,
};
pub use self::listing::{Listing, ListingRecord};
pub use self::platform::{PlatformConfig, PlatformFile, PlatformMetadata};
