const YOUTUBE_THUMBNAIL: &str = "https://img.youtube.com/vi/{id}/hqdefault.jpg";
const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/{id}?autoplay=1&rel=0&modestbranding=1";

/// Glyph shown in place of an image that failed to load.
pub const FALLBACK_GLYPH: &str = "📷";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaItem {
    Image {
        path: &'static str,
    },
    /// Legacy entries carry no `external_id` and may carry their own thumbnail.
    Video {
        external_id: Option<&'static str>,
        thumbnail: Option<&'static str>,
    },
}

impl MediaItem {
    pub const fn image(path: &'static str) -> Self {
        MediaItem::Image { path }
    }

    pub const fn youtube(external_id: &'static str) -> Self {
        MediaItem::Video {
            external_id: Some(external_id),
            thumbnail: None,
        }
    }

    pub const fn legacy_video(thumbnail: Option<&'static str>) -> Self {
        MediaItem::Video {
            external_id: None,
            thumbnail,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, MediaItem::Image { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    Url(String),
    Gradient,
}

/// Prefixes `path` with the configured base path, joined by exactly one slash.
pub fn asset_url(base_path: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

pub fn resolve_thumbnail(item: &MediaItem, base_path: &str) -> Thumbnail {
    match item {
        MediaItem::Image { path } => Thumbnail::Url(asset_url(base_path, path)),
        MediaItem::Video {
            external_id: Some(id),
            ..
        } => Thumbnail::Url(youtube_thumbnail_url(id)),
        MediaItem::Video {
            external_id: None,
            thumbnail: Some(thumbnail),
        } => Thumbnail::Url(asset_url(base_path, thumbnail)),
        MediaItem::Video {
            external_id: None,
            thumbnail: None,
        } => Thumbnail::Gradient,
    }
}

pub fn youtube_thumbnail_url(id: &str) -> String {
    YOUTUBE_THUMBNAIL.replace("{id}", &urlencoding::encode(id))
}

pub fn embed_url(id: &str) -> String {
    YOUTUBE_EMBED.replace("{id}", &urlencoding::encode(id))
}

/// Load progress of a single rendered image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoad {
    pub fn on_load(self) -> Self {
        match self {
            ImageLoad::Failed => ImageLoad::Failed,
            _ => ImageLoad::Loaded,
        }
    }

    /// Failure is terminal: there is no retry.
    pub fn on_error(self) -> Self {
        ImageLoad::Failed
    }

    pub fn shows_fallback(self) -> bool {
        self == ImageLoad::Failed
    }

    pub fn opacity_class(self) -> &'static str {
        match self {
            ImageLoad::Loaded => "media-image loaded",
            _ => "media-image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_base_path_with_a_single_slash() {
        assert_eq!(asset_url("/", "nextzone.svg"), "/nextzone.svg");
        assert_eq!(
            asset_url("/IHC-pagina-web/", "/timeline/idea.jpg"),
            "/IHC-pagina-web/timeline/idea.jpg"
        );
        assert_eq!(
            asset_url("https://cdn.example.com/site", "timeline/idea.jpg"),
            "https://cdn.example.com/site/timeline/idea.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            asset_url("/base/", "https://example.com/a.png"),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn image_thumbnail_uses_base_path() {
        let item = MediaItem::image("timeline/ring.jpg");
        assert_eq!(
            resolve_thumbnail(&item, "/IHC-pagina-web/"),
            Thumbnail::Url("/IHC-pagina-web/timeline/ring.jpg".to_string())
        );
    }

    #[test]
    fn video_thumbnail_uses_youtube_template() {
        let item = MediaItem::youtube("QMEVDcjxyuA");
        assert_eq!(
            resolve_thumbnail(&item, "/"),
            Thumbnail::Url("https://img.youtube.com/vi/QMEVDcjxyuA/hqdefault.jpg".to_string())
        );
    }

    #[test]
    fn legacy_video_falls_back_to_thumbnail_then_gradient() {
        let with_thumb = MediaItem::legacy_video(Some("timeline/round.jpg"));
        assert_eq!(
            resolve_thumbnail(&with_thumb, "/"),
            Thumbnail::Url("/timeline/round.jpg".to_string())
        );
        let bare = MediaItem::legacy_video(None);
        assert_eq!(resolve_thumbnail(&bare, "/"), Thumbnail::Gradient);
    }

    #[test]
    fn embed_url_follows_template() {
        assert_eq!(
            embed_url("QMEVDcjxyuA"),
            "https://www.youtube.com/embed/QMEVDcjxyuA?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn external_ids_are_percent_encoded() {
        assert_eq!(
            embed_url("a b&c"),
            "https://www.youtube.com/embed/a%20b%26c?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn failed_load_shows_fallback_and_stays_failed() {
        let state = ImageLoad::default().on_error();
        assert!(state.shows_fallback());
        assert_eq!(state.on_load(), ImageLoad::Failed);
        assert!(!ImageLoad::Pending.on_load().shows_fallback());
    }
}
