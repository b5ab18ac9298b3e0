mod banner;
mod banner_cell;
mod page_indicator;
mod status_bar;

pub use banner::BannerWidget;
pub use banner_cell::BannerCell;
pub use page_indicator::PageIndicatorWidget;
pub use status_bar::StatusBarWidget;
