pub mod carousel;
pub mod config;
pub mod error;

pub use carousel::{Carousel, DragOutcome, TickMove};
pub use config::{AppConfig, BannerConfig, EasingType, ScrollConfig, UiConfig};
pub use error::{Error, Result};
