use std::future::Future;

use futures::{Stream, TryStreamExt, stream};

use crate::{error::ApiError, types::Page};

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Flattens a cursor-paginated collection into a lazy stream of its items.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's `next` cursor afterwards. The stream ends after the first page
/// without a (non-empty) cursor. Page sizes are taken as they come, empty
/// pages included.
///
/// A failed fetch is yielded once and ends the stream. Consuming the stream
/// advances the remote cursor, so it cannot be restarted; call `paginate`
/// again for a fresh traversal.
pub fn paginate<'a, T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T, ApiError>> + 'a
where
    T: 'a,
    F: FnMut(Option<String>) -> Fut + 'a,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'a,
{
    stream::try_unfold((Cursor::Start, fetch), |(cursor, mut fetch)| async move {
        let cursor = match cursor {
            Cursor::Start => None,
            Cursor::Next(next) => Some(next),
            Cursor::Done => return Ok::<_, ApiError>(None),
        };

        let page = fetch(cursor).await?;
        let next = match page.next {
            Some(next) if !next.is_empty() => Cursor::Next(next),
            _ => Cursor::Done,
        };

        Ok(Some((page.items, (next, fetch))))
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, ApiError>)))
    .try_flatten()
}
