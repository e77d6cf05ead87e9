//! Page fetcher abstraction
//!
//! A fetcher performs one remote list call. The paginator drives it; it
//! never looks at how the call is made.

use super::types::{PageRequest, PageResult};
use crate::error::Result;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// A remote list operation that returns one page per call
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Item type carried by each page
    type Item: Send;

    /// Fetch the page starting at `request.cursor`, asking for `request.page_size` items
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<Self::Item>>;
}

#[async_trait]
impl<'a, F: PageFetcher + ?Sized> PageFetcher for &'a F {
    type Item = F::Item;

    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<Self::Item>> {
        (**self).fetch_page(request).await
    }
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for Arc<F> {
    type Item = F::Item;

    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<Self::Item>> {
        (**self).fetch_page(request).await
    }
}

/// Fetcher backed by an async closure
pub struct FnFetcher<F> {
    f: F,
}

/// Wrap an async closure as a [`PageFetcher`]
///
/// ```rust,ignore
/// let fetcher = fetch_fn(|req: PageRequest| async move {
///     Ok(PageResult::last(vec![req.page_size]))
/// });
/// ```
pub fn fetch_fn<F, Fut, T>(f: F) -> FnFetcher<F>
where
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<T>>> + Send + 'static,
    T: Send + 'static,
{
    FnFetcher { f }
}

#[async_trait]
impl<F, Fut, T> PageFetcher for FnFetcher<F>
where
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<T>>> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>> {
        (self.f)(request).await
    }
}

impl<F> std::fmt::Debug for FnFetcher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFetcher").finish_non_exhaustive()
    }
}
