// SPDX-License-Identifier: MPL-2.0
//! Remote image cache and rendering.
//!
//! Images are keyed by URL. The cache records in-flight downloads so a URL is
//! fetched once, keeps decoded handles under an LRU byte budget and remembers
//! failures so the placeholder stays put instead of retrying every frame.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::image::{Handle, Image};
use iced::widget::{container, Container, Space};
use iced::{ContentFit, Element, Length, Theme};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Maximum number of URLs tracked.
pub const DEFAULT_MAX_ENTRIES: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Encoded bytes kept in memory (16 MB).
pub const DEFAULT_MAX_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Loaded { handle: Handle, size_bytes: usize },
    Failed,
}

impl RemoteImage {
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            RemoteImage::Loaded { handle, .. } => Some(handle),
            RemoteImage::Loading | RemoteImage::Failed => None,
        }
    }

    fn size_bytes(&self) -> usize {
        match self {
            RemoteImage::Loaded { size_bytes, .. } => *size_bytes,
            RemoteImage::Loading | RemoteImage::Failed => 0,
        }
    }
}

pub struct RemoteImageCache {
    cache: LruCache<String, RemoteImage>,
    max_bytes: usize,
    current_bytes: usize,
}

impl std::fmt::Debug for RemoteImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteImageCache")
            .field("entries", &self.cache.len())
            .field("current_bytes", &self.current_bytes)
            .finish()
    }
}

impl Default for RemoteImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_BYTES)
    }
}

impl RemoteImageCache {
    #[must_use]
    pub fn new(max_entries: NonZeroUsize, max_bytes: usize) -> Self {
        Self {
            cache: LruCache::new(max_entries),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Marks `url` as loading when it is unknown.
    ///
    /// Returns `true` when the caller should start a download. Blank URLs are
    /// never fetched.
    pub fn request(&mut self, url: &str) -> bool {
        if url.trim().is_empty() || self.cache.contains(url) {
            return false;
        }
        self.put(url.to_string(), RemoteImage::Loading);
        true
    }

    /// Stores downloaded bytes, evicting least recently used images as needed.
    pub fn insert_loaded(&mut self, url: &str, bytes: Vec<u8>) {
        let size_bytes = bytes.len();
        if size_bytes > self.max_bytes {
            log::debug!("image {} too large to cache ({} bytes)", url, size_bytes);
            self.put(url.to_string(), RemoteImage::Failed);
            return;
        }

        if let Some(existing) = self.cache.pop(url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }
        while self.current_bytes + size_bytes > self.max_bytes {
            match self.cache.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                }
                None => break,
            }
        }

        self.put(
            url.to_string(),
            RemoteImage::Loaded {
                handle: Handle::from_bytes(bytes),
                size_bytes,
            },
        );
    }

    pub fn mark_failed(&mut self, url: &str) {
        self.put(url.to_string(), RemoteImage::Failed);
    }

    /// Looks up `url` without touching the LRU order (views only borrow).
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&RemoteImage> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }

    fn put(&mut self, url: String, image: RemoteImage) {
        self.current_bytes += image.size_bytes();
        if let Some((_, replaced)) = self.cache.push(url, image) {
            self.current_bytes = self.current_bytes.saturating_sub(replaced.size_bytes());
        }
    }
}

/// Renders the cached image for `url`, or a solid placeholder while it is
/// loading, after a failure or when nothing is cached.
pub fn view<'a, Message: 'a>(
    cache: &RemoteImageCache,
    url: &str,
    width: Length,
    height: Length,
    fit: ContentFit,
    opacity: f32,
) -> Element<'a, Message> {
    match cache.get(url).and_then(RemoteImage::handle) {
        Some(handle) => Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(fit)
            .opacity(opacity)
            .into(),
        None => placeholder(width, height, radius::NONE),
    }
}

/// Solid block shown in place of a missing image.
pub fn placeholder<'a, Message: 'a>(width: Length, height: Length, corner: f32) -> Element<'a, Message> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(width)
        .height(height)
        .style(move |_theme: &Theme| container::Style {
            background: Some(palette::GRAY_200.into()),
            border: iced::Border {
                radius: corner.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cache(max_bytes: usize) -> RemoteImageCache {
        RemoteImageCache::new(NonZeroUsize::new(8).unwrap(), max_bytes)
    }

    #[test]
    fn request_is_issued_once_per_url() {
        let mut cache = RemoteImageCache::default();
        assert!(cache.request("https://example.com/a.png"));
        assert!(!cache.request("https://example.com/a.png"));
        assert!(matches!(
            cache.get("https://example.com/a.png"),
            Some(RemoteImage::Loading)
        ));
    }

    #[test]
    fn blank_url_is_never_requested() {
        let mut cache = RemoteImageCache::default();
        assert!(!cache.request(""));
        assert!(!cache.request("  "));
        assert!(cache.is_empty());
    }

    #[test]
    fn loaded_image_exposes_handle() {
        let mut cache = RemoteImageCache::default();
        cache.request("a");
        cache.insert_loaded("a", vec![0u8; 10]);
        assert!(cache.get("a").and_then(RemoteImage::handle).is_some());
        assert_eq!(cache.current_bytes(), 10);
    }

    #[test]
    fn failure_is_remembered() {
        let mut cache = RemoteImageCache::default();
        cache.request("a");
        cache.mark_failed("a");
        assert!(matches!(cache.get("a"), Some(RemoteImage::Failed)));
        assert!(!cache.request("a"));
    }

    #[test]
    fn byte_budget_evicts_least_recently_used() {
        let mut cache = small_cache(100);
        cache.insert_loaded("a", vec![0u8; 60]);
        cache.insert_loaded("b", vec![0u8; 60]);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert_eq!(cache.current_bytes(), 60);
    }

    #[test]
    fn oversized_image_is_treated_as_failed() {
        let mut cache = small_cache(10);
        cache.insert_loaded("huge", vec![0u8; 11]);
        assert!(matches!(cache.get("huge"), Some(RemoteImage::Failed)));
        assert_eq!(cache.current_bytes(), 0);
    }

    #[test]
    fn reloading_same_url_does_not_double_count() {
        let mut cache = small_cache(100);
        cache.insert_loaded("a", vec![0u8; 40]);
        cache.insert_loaded("a", vec![0u8; 30]);
        assert_eq!(cache.current_bytes(), 30);
        assert_eq!(cache.len(), 1);
    }
}
