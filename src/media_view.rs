use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::RuntimeConfig;
use crate::media::{embed_url, resolve_thumbnail, ImageLoad, MediaItem, Thumbnail, FALLBACK_GLYPH};
use crate::viewer::{ViewerEvent, ViewerKey, ViewerState};

/// Image that swaps itself for a placeholder glyph when it fails to load.
///
/// Key it by `src` so a new source starts from a fresh load state.
#[component]
pub fn FallbackImage(src: String, alt: String, class: String, eager: Option<bool>) -> Element {
    let mut load = use_signal(ImageLoad::default);

    if load().shows_fallback() {
        return rsx! {
            div { class: "media-fallback {class}", role: "img", aria_label: "{alt}",
                span { class: "media-fallback-glyph", "{FALLBACK_GLYPH}" }
                p { class: "media-fallback-text", "Imagen no disponible" }
            }
        };
    }

    let loading = if eager.unwrap_or(false) { "eager" } else { "lazy" };
    rsx! {
        img {
            class: "{load().opacity_class()} {class}",
            src: "{src}",
            alt: "{alt}",
            loading: "{loading}",
            decoding: "async",
            onload: move |_| {
                let next = load().on_load();
                load.set(next);
            },
            onerror: move |_| {
                let next = load().on_error();
                load.set(next);
            },
        }
    }
}

#[component]
pub fn MediaThumbnail(item: MediaItem, alt: String, onselect: EventHandler<()>) -> Element {
    let config = use_context::<RuntimeConfig>();
    let thumbnail = resolve_thumbnail(&item, &config.base_path);
    let is_video = !item.is_image();
    let label = if is_video { "Reproducir video" } else { "Ver imagen" };

    rsx! {
        button {
            r#type: "button",
            class: if is_video { "media-thumb video" } else { "media-thumb" },
            aria_label: "{label}: {alt}",
            onclick: move |_| onselect.call(()),
            match thumbnail {
                Thumbnail::Url(url) => rsx! {
                    FallbackImage { key: "{url}", src: url.clone(), alt: alt.clone(), class: "media-thumb-image".to_string() }
                },
                Thumbnail::Gradient => rsx! {
                    div { class: "media-thumb-gradient" }
                },
            }
            if is_video {
                span { class: "media-thumb-play", "▶" }
            }
        }
    }
}

fn viewer_key(key: &Key) -> Option<ViewerKey> {
    match key {
        Key::Escape => Some(ViewerKey::Escape),
        Key::ArrowLeft => Some(ViewerKey::ArrowLeft),
        Key::ArrowRight => Some(ViewerKey::ArrowRight),
        _ => None,
    }
}

#[component]
pub fn ViewerOverlay(state: ViewerState, ondispatch: EventHandler<ViewerEvent>) -> Element {
    if !state.is_open() {
        return rsx! {};
    }

    let key_state = state.clone();
    rsx! {
        div {
            class: "viewer-backdrop",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |_event| {
                #[cfg(target_arch = "wasm32")]
                {
                    let element = _event.data.as_ref().as_web_event();
                    if let Ok(node) = element.dyn_into::<web_sys::HtmlElement>() {
                        let _ = node.focus();
                    }
                }
            },
            onclick: move |_| ondispatch.call(ViewerEvent::Close),
            onkeydown: move |event| {
                let Some(key) = viewer_key(&event.key()) else {
                    return;
                };
                if let Some(viewer_event) = ViewerEvent::from_key(key, &key_state) {
                    event.prevent_default();
                    ondispatch.call(viewer_event);
                }
            },
            button {
                r#type: "button",
                class: "viewer-close",
                aria_label: "Cerrar",
                onclick: move |event| {
                    event.stop_propagation();
                    ondispatch.call(ViewerEvent::Close);
                },
                "✕"
            }
            match &state {
                ViewerState::ShowingImage { .. } => rsx! {
                    ImageViewer { state: state.clone(), ondispatch }
                },
                ViewerState::ShowingVideo { external_id } => rsx! {
                    div {
                        class: "viewer-content video",
                        onclick: move |event| event.stop_propagation(),
                        iframe {
                            class: "viewer-video",
                            src: "{embed_url(external_id)}",
                            title: "Video del desarrollo",
                            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                },
                ViewerState::Closed => rsx! {},
            }
        }
    }
}

#[component]
fn ImageViewer(state: ViewerState, ondispatch: EventHandler<ViewerEvent>) -> Element {
    let Some((url, position, total)) = state.current_image() else {
        return rsx! {};
    };
    let url = url.to_string();
    let navigable = state.can_navigate();

    rsx! {
        div {
            class: "viewer-content image",
            onclick: move |event| event.stop_propagation(),
            FallbackImage {
                key: "{url}",
                src: url.clone(),
                alt: format!("Imagen {position} de {total}"),
                class: "viewer-image".to_string(),
                eager: true,
            }
            if navigable {
                button {
                    r#type: "button",
                    class: "viewer-nav prev",
                    aria_label: "Imagen anterior",
                    onclick: move |_| ondispatch.call(ViewerEvent::Previous),
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "viewer-nav next",
                    aria_label: "Imagen siguiente",
                    onclick: move |_| ondispatch.call(ViewerEvent::Next),
                    "›"
                }
                p { class: "viewer-counter", "{position} / {total}" }
            }
        }
    }
}
