//! Page transition animation for the banner carousel.
//!
//! Horizontal paging with configurable easing: `easing` holds the pure
//! curves, `timing` the progress/interpolation helpers, and `pager` the
//! animator that drives the fractional column offset between page
//! boundaries. Silent repositions bypass the animator entirely via
//! `PagerAnimator::set_offset`.

pub mod config;
pub mod easing;
pub mod pager;
pub mod timing;

pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
pub use pager::PagerAnimator;
