use std::collections::HashMap;

use crate::media::MediaItem;

pub const PAGE_SIZE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Pagination offsets into each timeline entry's media list, keyed by entry index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryCursor {
    offsets: HashMap<usize, usize>,
}

impl GalleryCursor {
    pub fn offset(&self, entry_index: usize) -> usize {
        self.offsets.get(&entry_index).copied().unwrap_or(0)
    }

    pub fn visible_slice<'a>(&self, entry_index: usize, media: &'a [MediaItem]) -> &'a [MediaItem] {
        let start = self.offset(entry_index).min(media.len());
        let end = (start + PAGE_SIZE).min(media.len());
        &media[start..end]
    }

    pub fn advance(&mut self, entry_index: usize, len: usize, direction: Direction) {
        let offset = self.offset(entry_index);
        let next = match direction {
            Direction::Forward if offset + PAGE_SIZE < len => offset + PAGE_SIZE,
            Direction::Forward => 0,
            Direction::Backward if offset == 0 => len.saturating_sub(PAGE_SIZE),
            // Previous aligned page, also when leaving a trailing partial page.
            Direction::Backward => (offset - 1) / PAGE_SIZE * PAGE_SIZE,
        };
        self.offsets.insert(entry_index, next);
    }

    /// 1-based page number and page count for the entry's indicator.
    pub fn page_position(&self, entry_index: usize, len: usize) -> (usize, usize) {
        let pages = len.div_ceil(PAGE_SIZE).max(1);
        let offset = self.offset(entry_index);
        let page = if offset + PAGE_SIZE >= len {
            pages
        } else {
            offset / PAGE_SIZE + 1
        };
        (page, pages)
    }
}

pub fn has_pagination(len: usize) -> bool {
    len > PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: MediaItem = MediaItem::image("a.jpg");
    const B: MediaItem = MediaItem::image("b.jpg");
    const C: MediaItem = MediaItem::image("c.jpg");
    const D: MediaItem = MediaItem::youtube("QMEVDcjxyuA");
    const E: MediaItem = MediaItem::image("e.jpg");

    #[test]
    fn three_items_page_forward_and_wrap() {
        let media = [A, B, C];
        let mut cursor = GalleryCursor::default();
        assert_eq!(cursor.visible_slice(0, &media), &[A, B]);

        cursor.advance(0, media.len(), Direction::Forward);
        assert_eq!(cursor.offset(0), 2);
        assert_eq!(cursor.visible_slice(0, &media), &[C]);

        cursor.advance(0, media.len(), Direction::Forward);
        assert_eq!(cursor.offset(0), 0);
        assert_eq!(cursor.visible_slice(0, &media), &[A, B]);
    }

    #[test]
    fn backward_from_start_wraps_to_last_page() {
        let media = [A, B, C, D, E];
        let mut cursor = GalleryCursor::default();
        cursor.advance(0, media.len(), Direction::Backward);
        assert_eq!(cursor.offset(0), 3);
        assert_eq!(cursor.visible_slice(0, &media), &[D, E]);

        cursor.advance(0, media.len(), Direction::Backward);
        assert_eq!(cursor.offset(0), 2);
        assert_eq!(cursor.visible_slice(0, &media), &[C, D]);
        cursor.advance(0, media.len(), Direction::Backward);
        assert_eq!(cursor.offset(0), 0);
    }

    #[test]
    fn short_lists_show_everything_without_controls() {
        let cursor = GalleryCursor::default();
        for media in [&[][..], &[A][..], &[A, B][..]] {
            assert_eq!(cursor.visible_slice(0, media), media);
            assert!(!has_pagination(media.len()));
        }
        assert!(has_pagination(3));
    }

    #[test]
    fn entries_page_independently() {
        let media = [A, B, C, D];
        let mut cursor = GalleryCursor::default();
        cursor.advance(1, media.len(), Direction::Forward);
        assert_eq!(cursor.offset(0), 0);
        assert_eq!(cursor.offset(1), 2);
        assert_eq!(cursor.visible_slice(1, &media), &[C, D]);
    }

    #[test]
    fn offsets_stay_in_bounds_under_mixed_steps() {
        for len in 3..9 {
            let mut cursor = GalleryCursor::default();
            let steps = [
                Direction::Forward,
                Direction::Backward,
                Direction::Backward,
                Direction::Forward,
                Direction::Forward,
                Direction::Backward,
                Direction::Forward,
                Direction::Forward,
                Direction::Forward,
                Direction::Backward,
                Direction::Backward,
                Direction::Backward,
                Direction::Backward,
            ];
            for step in steps {
                cursor.advance(0, len, step);
                let offset = cursor.offset(0);
                assert!(offset < len, "len {len} offset {offset}");
                assert!(
                    offset % PAGE_SIZE == 0 || offset + PAGE_SIZE >= len,
                    "len {len} offset {offset} is neither page aligned nor the final page"
                );
            }
        }
    }

    #[test]
    fn forward_cycle_returns_to_start() {
        for len in 1usize..10 {
            let mut cursor = GalleryCursor::default();
            for _ in 0..len.div_ceil(PAGE_SIZE) {
                cursor.advance(0, len, Direction::Forward);
            }
            assert_eq!(cursor.offset(0), 0, "len {len}");
        }
    }

    #[test]
    fn page_position_tracks_offset() {
        let mut cursor = GalleryCursor::default();
        assert_eq!(cursor.page_position(0, 5), (1, 3));
        cursor.advance(0, 5, Direction::Forward);
        assert_eq!(cursor.page_position(0, 5), (2, 3));
        cursor.advance(0, 5, Direction::Forward);
        assert_eq!(cursor.page_position(0, 5), (3, 3));
        assert_eq!(GalleryCursor::default().page_position(0, 0), (1, 1));
    }
}
