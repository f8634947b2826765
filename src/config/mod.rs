//! Configuration and path management for spendtrack

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
