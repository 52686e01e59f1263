//! Region and engine configuration types

/// Region of a mono frame handed over by the host.
///
/// Rows are `width` bytes apart, and pixel `(px, py)` sits at byte `py * width + px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Region starting at the frame origin.
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Configuration for the correction engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Whether to reject regions larger than `max_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted width or height
    pub max_dimension: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for EngineConfig
#[derive(Default)]
pub struct EngineConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl EngineConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> EngineConfig {
        let default = EngineConfig::default();
        EngineConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
