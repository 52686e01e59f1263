//! CFA pattern module
//!
//! Maps a Bayer ordering and a colour role to the sample offset inside a 2x2 block.

mod mapper;
pub mod types;

pub use mapper::{offsets, position, site};
pub use types::{CfaPattern, Role};
