//! Application-level configuration.
//!
//! - [`CrewParams`] - throttle and temperature split used by the pipeline driver

pub mod crew_params;

pub use crew_params::CrewParams;
