//! Sequential driver for Spotify's offset/limit paginated endpoints.

use std::future::Future;

/// Number of items requested per page.
pub const PAGE_SIZE: usize = 50;

/// Number of `PAGE_SIZE` windows needed to cover `total` items.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Fetches `total` items through `page_fetch(offset, limit)` one page at a time.
///
/// Pages are requested strictly in order and each request is awaited before the
/// next one is issued, since the client behind `page_fetch` may refresh its
/// credential between calls. The last window still asks for `PAGE_SIZE` items;
/// the service returns whatever is left. Results are concatenated in call
/// order.
///
/// A `total` of zero returns an empty vector without calling `page_fetch`. The
/// first failing page aborts the whole fetch and its error is returned as is.
///
/// # Example
///
/// ```
/// let tracks = fetch_all(playlist.tracks.total as usize, |offset, limit| {
///     api.playlist_tracks(&playlist.id, offset, limit)
/// })
/// .await?;
/// ```
pub async fn fetch_all<T, E, F, Fut>(total: usize, mut page_fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut data = Vec::with_capacity(total);
    for page in 0..page_count(total) {
        let slice = page_fetch(page * PAGE_SIZE, PAGE_SIZE).await?;
        data.extend(slice);
    }
    Ok(data)
}
