//! Stripe shift glitch effect.
//!
//! The source image is cut into horizontal stripes of random height, every
//! stripe is pushed left or right by a random offset (alternating direction),
//! optionally mirrored, and the result is cropped to hide the empty margins
//! left by the shifting.

pub mod export;
pub mod params;
pub mod planner;
pub mod post_process;
pub mod random;
pub mod render;
pub mod renderer;
pub mod session;
pub mod surface;

pub use export::{EXPORT_FILE_NAME, encode_png, save_png};
pub use params::EffectParams;
pub use planner::{StripeBand, StripePlan, plan};
pub use post_process::trim_margins;
pub use random::RandomSource;
pub use render::render_effect;
pub use renderer::{BandPlacement, render_band};
pub use session::Session;
pub use surface::{DrawingSurface, SourceRect, Transform, TransformGuard};

pub type StripeShiftResult<T> = Result<T, StripeShiftError>;

#[derive(thiserror::Error, Debug)]
pub enum StripeShiftError {
    #[error("Invalid parameter range: {0}")]
    InvalidParameterRange(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
