use image::error::{LimitError, LimitErrorKind};
use image::{DynamicImage, ImageError, ImageResult, Limits, Rgba, RgbaImage, imageops};
use tracing::debug;

/// Fill for every canvas pixel outside the pasted source
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

const BYTES_PER_PIXEL: u64 = 4;

/// Square target and top-left anchor for a non-square image.
///
/// Offsets use floor division, so an odd remainder lands on the right or
/// bottom edge and `x_offset + width <= target_size` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingPlan {
    pub target_size: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

impl PaddingPlan {
    /// Bytes an RGBA canvas of `target_size` squared needs
    pub fn canvas_bytes(&self) -> u64 {
        u64::from(self.target_size)
            .pow(2)
            .saturating_mul(BYTES_PER_PIXEL)
    }

    /// Returns `None` when the image is already square.
    pub fn for_dimensions(width: u32, height: u32) -> Option<Self> {
        if width == height {
            return None;
        }
        let target_size = width.max(height);
        Some(Self {
            target_size,
            x_offset: (target_size - width) / 2,
            y_offset: (target_size - height) / 2,
        })
    }
}

/// Composite `source` onto a transparent `target_size` square canvas at the plan's offsets.
///
/// Fails with `ImageError::Limits` instead of allocating when the canvas would
/// exceed the `image` crate's default allocation limit.
pub fn pad_to_square(source: &DynamicImage, plan: PaddingPlan) -> ImageResult<RgbaImage> {
    let budget = Limits::default().max_alloc.unwrap_or(u64::MAX);
    if plan.canvas_bytes() > budget {
        return Err(ImageError::Limits(LimitError::from_kind(
            LimitErrorKind::InsufficientMemory,
        )));
    }

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        source.width(),
        source.height(),
        plan.x_offset,
        plan.y_offset
    );

    let mut canvas = RgbaImage::from_pixel(plan.target_size, plan.target_size, TRANSPARENT);
    let rgba = source.to_rgba8();
    // Alpha-over onto a fully transparent canvas reduces to a straight copy
    imageops::replace(
        &mut canvas,
        &rgba,
        i64::from(plan.x_offset),
        i64::from(plan.y_offset),
    );
    Ok(canvas)
}
