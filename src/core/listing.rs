use serde::Serialize;

use crate::config::ListingConfig;
use crate::core::error::{AppError, Result};

/// One page of a filtered listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: u32,
    pub page: u32,
    pub page_size: u32,
}

/// Case-insensitive substring match across the designated searchable fields.
///
/// An empty query matches everything; multiple fields are OR-ed together.
pub fn matches_query<S: AsRef<str>>(query: &str, fields: &[S]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.as_ref().to_lowercase().contains(&needle))
}

/// Resolves requested paging against the configured defaults and caps.
///
/// An omitted page defaults to the first; an omitted page size to the
/// configured default. Requests above the cap are rejected rather than
/// silently clamped.
pub fn resolve_paging(
    page: Option<u32>,
    page_size: Option<u32>,
    config: &ListingConfig,
) -> Result<(u32, u32)> {
    let page = page.unwrap_or(1);
    let page_size = page_size.unwrap_or(config.default_page_size);

    if page_size > config.max_page_size {
        return Err(AppError::validation(format!(
            "page_size máximo é {}",
            config.max_page_size
        )));
    }

    Ok((page, page_size))
}

/// Slices an already-filtered collection into a 1-based page.
///
/// A page past the end yields an empty item list, never an error; only
/// `page == 0` or `page_size == 0` are invalid input.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(AppError::validation("page_size deve ser maior que zero"));
    }
    if page == 0 {
        return Err(AppError::validation("page é contada a partir de 1"));
    }

    let total_items = items.len();
    let total_pages = (total_items.div_ceil(page_size as usize)) as u32;
    let start = (page as usize - 1).saturating_mul(page_size as usize);

    let items = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Ok(Page {
        items,
        total_items,
        total_pages,
        page,
        page_size,
    })
}
