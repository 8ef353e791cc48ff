//! Lead intake and site content for the Chesterfield property management website.

pub mod config;
pub mod error;
pub mod leads;
pub mod site;
pub mod telemetry;
