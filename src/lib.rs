pub mod colour_correction;
pub mod logger;
