//! Domain logic: units, conversion, catalog, routing, metadata and ratings

pub mod catalog;
pub mod convert;
pub mod features;
pub mod rating;
pub mod router;
pub mod seo;
pub mod units;
