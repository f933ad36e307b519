//! Core building blocks: squaring parameters and the padding plan/compositing
//! step. These are internal primitives consumed by the high-level `api` module.
pub mod padding;
pub mod params;
