use dioxus::prelude::*;
use dioxus_router::Link;

use crate::chrome::{SiteFooter, SiteHeader};
use crate::config::RuntimeConfig;
use crate::gallery::{has_pagination, Direction, GalleryCursor};
use crate::media::MediaItem;
use crate::media_view::{MediaThumbnail, ViewerOverlay};
use crate::routes::Route;
use crate::scroll_lock::{sync_scroll_lock, DocumentBody, ScrollLockGuard};
use crate::timeline::{timeline, TimelineEntry};
use crate::viewer::{open_event, ViewerEvent, ViewerState};

const TOOLS: [&str; 3] = ["Unity", "Meta Quest 3", "Blender"];

fn dispatch(mut viewer: Signal<ViewerState>, event: ViewerEvent) {
    tracing::debug!("viewer: {event:?}");
    let mut state = viewer.write();
    let current = std::mem::take(&mut *state);
    *state = current.transition(event);
}

#[component]
pub fn GamePage() -> Element {
    let viewer = use_signal(ViewerState::default);
    let cursor = use_signal(GalleryCursor::default);
    let mut scroll_lock = use_signal(|| None::<ScrollLockGuard<DocumentBody>>);

    use_effect(move || {
        let wants_lock = viewer.read().is_open();
        let mut slot = scroll_lock.write();
        sync_scroll_lock(&mut *slot, wants_lock, || DocumentBody);
    });

    use_drop(move || scroll_lock.set(None));

    rsx! {
        document::Title { "Virtual Knockout | NextZone VR Studio" }
        document::Meta { name: "description", content: "Del boceto al primer round: el desarrollo de Virtual Knockout, un juego de boxeo VR." }
        div { class: "page game-page",
            SiteHeader {}
            section { class: "game-hero",
                h2 { class: "game-hero-title", "VIRTUAL KNOCKOUT" }
                p { class: "game-hero-tagline", "Siente el poder en tus puños en el ring de realidad virtual" }
            }
            section { class: "timeline-section",
                h3 { class: "section-title", "Del Boceto al Primer Round" }
                div { class: "timeline",
                    div { class: "timeline-line" }
                    for (index, entry) in timeline().iter().enumerate() {
                        TimelineCard {
                            key: "{entry.id}",
                            index,
                            entry: *entry,
                            cursor,
                            viewer,
                        }
                    }
                }
            }
            section { class: "credits-section",
                h3 { class: "section-title", "Herramientas y Creadores" }
                div { class: "credits-grid",
                    div { class: "card",
                        h4 { class: "card-title", "Tecnología" }
                        ul { class: "credits-list",
                            for tool in TOOLS {
                                li { key: "{tool}", "• {tool}" }
                            }
                        }
                    }
                    div { class: "card",
                        h4 { class: "card-title", "Equipo" }
                        p { class: "muted", "Los nombres de los integrantes del grupo" }
                    }
                }
                Link { to: Route::Project {}, class: "button-gradient", "Ver el proyecto" }
            }
            SiteFooter {}
            ViewerOverlay {
                state: viewer(),
                ondispatch: move |event| dispatch(viewer, event),
            }
        }
    }
}

#[component]
fn TimelineCard(
    index: usize,
    entry: TimelineEntry,
    cursor: Signal<GalleryCursor>,
    viewer: Signal<ViewerState>,
) -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut cursor = cursor;
    let len = entry.media.len();
    let first = cursor.read().offset(index);
    let (page, pages) = cursor.read().page_position(index, len);
    let visible: Vec<(usize, MediaItem, Option<ViewerEvent>)> = cursor
        .read()
        .visible_slice(index, entry.media)
        .iter()
        .enumerate()
        .map(|(position, item)| {
            (
                first + position,
                *item,
                open_event(&entry, &config.base_path, item),
            )
        })
        .collect();
    let side = if index % 2 == 0 { "left" } else { "right" };

    rsx! {
        div { class: "timeline-item {side}",
            div { class: "timeline-card",
                h4 { class: "card-title", "{entry.title}" }
                p { class: "card-description", "{entry.description}" }
                div { class: "media-grid",
                    for (position, item, event) in visible {
                        MediaThumbnail {
                            key: "{position}",
                            item,
                            alt: format!("{} {}", entry.title, position + 1),
                            onselect: move |_| {
                                if let Some(event) = event.clone() {
                                    dispatch(viewer, event);
                                }
                            },
                        }
                    }
                }
                if has_pagination(len) {
                    div { class: "media-pager",
                        button {
                            r#type: "button",
                            class: "media-pager-button",
                            aria_label: "Anterior",
                            onclick: move |_| cursor.write().advance(index, len, Direction::Backward),
                            "‹"
                        }
                        span { class: "media-pager-position", "{page} / {pages}" }
                        button {
                            r#type: "button",
                            class: "media-pager-button",
                            aria_label: "Siguiente",
                            onclick: move |_| cursor.write().advance(index, len, Direction::Forward),
                            "›"
                        }
                    }
                }
            }
            div { class: "timeline-dot" }
            div { class: "timeline-spacer" }
        }
    }
}
