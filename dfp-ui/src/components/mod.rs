//! Reusable Dioxus RSX components for the fare price form.

mod loading_spinner;
mod notice_display;
mod page_header;
mod price_card;
mod price_grid;
mod query_form;

pub use loading_spinner::LoadingSpinner;
pub use notice_display::NoticeDisplay;
pub use page_header::PageHeader;
pub use price_card::PriceCard;
pub use price_grid::PriceGrid;
pub use query_form::QueryForm;
