//! Bayer colour correction module
//!
//! Applies a user-selected 3x3 colour matrix to raw single-channel Bayer
//! frames, keeping the mosaic layout intact. Matrices and the active CFA
//! pattern live in a persisted [`MatrixStore`].

pub mod common;
pub mod conversions;
pub mod engine;
pub mod host;
pub mod matrix;
pub mod pattern;
pub mod store;
pub mod tiff;
pub mod timing;

pub use common::{
    CorrectionError,
    Result,
};

pub use pattern::{
    CfaPattern,
    Role,
};

pub use matrix::{
    ColourMatrix,
    DEFAULT_TITLE,
};

pub use store::{
    CorrectionConfig,
    CorrectionSnapshot,
    JsonFileStore,
    KeyValueStore,
    MatrixStore,
    MemoryStore,
    Properties,
    StoreConfig,
};

pub use engine::{
    CorrectionEngine,
    EngineConfig,
    Rect,
};

pub use host::{
    CamInfo,
    ColourCorrectionFilter,
    FilterListener,
    MonoFilter,
};

pub use self::tiff::{
    MosaicImage,
    TiffCompression,
    TiffOutputConfig,
};

pub use conversions::TiffCorrectionPipeline;
pub use timing::PipelineTimings;
