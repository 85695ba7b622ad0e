mod bookmark;
mod ids;
mod pagination;
mod post;
mod tag;
mod theme;

pub use bookmark::BookmarkItem;
pub use ids::PostId;
pub use pagination::{page_window, PageWindow, PaginationInfo, PAGE_WINDOW_SIZE};
pub use post::{Gender, Post};
pub use tag::{Tag, TagId};
pub use theme::Theme;
