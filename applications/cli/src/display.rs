//! Terminal rendering of posts, bookmarks and paging

use chrono::{DateTime, Utc};
use ohohub_core::time::format_relative_time;
use ohohub_core::{page_window, BookmarkItem, PaginationInfo, Post, Tag};

/// One line per post: id, title, account and age
pub fn post_line(post: &Post, now: DateTime<Utc>) -> String {
    let account = post
        .x_id
        .as_deref()
        .filter(|x| !x.is_empty())
        .map(|x| format!(" @{x}"))
        .unwrap_or_default();

    format!(
        "{}  {} [{}]{}  ({})",
        post.id,
        post.title,
        post.gender,
        account,
        format_relative_time(post.created_at, now)
    )
}

pub fn bookmark_line(item: &BookmarkItem, now: DateTime<Utc>) -> String {
    format!(
        "{}  {} [{}]  saved {}",
        item.id,
        item.title,
        item.gender,
        format_relative_time(item.bookmarked_at, now)
    )
}

/// Comma separated `#name(id)` list
pub fn tag_list(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| format!("#{}({})", t.name, t.id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pager row such as `< 1 2 [3] 4 5 >  (page 3 of 9, 87 items)`
///
/// Arrows are shown only where a neighbouring page exists.
pub fn pager(info: &PaginationInfo) -> String {
    if info.total_pages == 0 {
        return "(no results)".to_string();
    }

    let window = page_window(info.current_page, info.total_pages);
    let mut parts = Vec::with_capacity(window.pages.len() + 2);

    if window.has_prev {
        parts.push("<".to_string());
    }
    for page in &window.pages {
        if *page == window.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.has_next {
        parts.push(">".to_string());
    }

    format!(
        "{}  (page {} of {}, {} items)",
        parts.join(" "),
        info.current_page,
        info.total_pages,
        info.total_items
    )
}
