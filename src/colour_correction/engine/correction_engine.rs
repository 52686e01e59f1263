use tracing::{instrument, trace, warn};

use crate::colour_correction::common::error::{CorrectionError, Result};
use crate::colour_correction::engine::types::{EngineConfig, Rect};
use crate::colour_correction::matrix::ColourMatrix;
use crate::colour_correction::pattern::{offsets, CfaPattern};
use crate::colour_correction::store::CorrectionSnapshot;

/// Geometry of a validated region, in buffer coordinates.
struct Blocks {
    x: usize,
    y: usize,
    stride: usize,
    across: usize,
    down: usize,
}

pub struct CorrectionEngine {
    config: EngineConfig,
}

impl Default for CorrectionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CorrectionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    fn validate(&self, rect: Rect, buffer_len: usize) -> Result<Blocks> {
        let invalid = || CorrectionError::InvalidGeometry {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        };

        if rect.width <= 0 || rect.height <= 0 || rect.x < 0 || rect.y < 0 {
            return Err(invalid());
        }

        let (width, height) = (rect.width as usize, rect.height as usize);

        if self.config.validate_dimensions {
            if let Some(max) = self.config.max_dimension {
                if width > max || height > max {
                    warn!("Region {}x{} exceeds maximum {}", width, height, max);
                    return Err(invalid());
                }
            }
        }

        let blocks = Blocks {
            x: rect.x as usize,
            y: rect.y as usize,
            stride: width,
            across: width / 2,
            down: height / 2,
        };

        if blocks.across > 0 && blocks.down > 0 {
            let last_row = blocks.y + 2 * blocks.down - 1;
            let last_col = blocks.x + 2 * blocks.across - 1;
            let required = last_row * blocks.stride + last_col + 1;
            if buffer_len < required {
                return Err(CorrectionError::BufferTooSmall {
                    required,
                    actual: buffer_len,
                });
            }
        }

        Ok(blocks)
    }

    /// Corrects every full 2x2 block of `rect` in place.
    ///
    /// A trailing odd row or column is left as is. Green sites of a block both
    /// receive the corrected mean of the two greens.
    #[instrument(level = "debug", skip(self, buffer, matrix), fields(len = buffer.len()))]
    pub fn apply(
        &self,
        buffer: &mut [u8],
        rect: Rect,
        matrix: &ColourMatrix,
        pattern: CfaPattern,
    ) -> Result<()> {
        let blocks = self.validate(rect, buffer.len())?;
        let stride = blocks.stride;
        let [r_at, g1_at, g2_at, b_at] = offsets(pattern).map(|(dx, dy)| dy * stride + dx);

        for by in 0..blocks.down {
            let row = (blocks.y + 2 * by) * stride + blocks.x;
            for bx in 0..blocks.across {
                let base = row + 2 * bx;

                let r = buffer[base + r_at] as f64;
                let g1 = buffer[base + g1_at] as f64;
                let g2 = buffer[base + g2_at] as f64;
                let b = buffer[base + b_at] as f64;

                let g = (g1 + g2) / 2.0;
                let [new_r, new_g, new_b] = matrix.transform(r, g, b);

                let new_g = clip(new_g);
                buffer[base + r_at] = clip(new_r);
                buffer[base + g1_at] = new_g;
                buffer[base + g2_at] = new_g;
                buffer[base + b_at] = clip(new_b);
            }
        }

        trace!(blocks = blocks.across * blocks.down, "Region corrected");
        Ok(())
    }

    /// Corrects `rect` with the matrix and pattern captured in `snapshot`.
    pub fn apply_snapshot(
        &self,
        buffer: &mut [u8],
        rect: Rect,
        snapshot: &CorrectionSnapshot,
    ) -> Result<()> {
        self.apply(buffer, rect, &snapshot.matrix, snapshot.pattern)
    }
}

/// Truncates toward zero, then saturates to the byte range.
#[inline]
fn clip(value: f64) -> u8 {
    (value as i32).clamp(0, u8::MAX as i32) as u8
}
