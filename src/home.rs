use dioxus::prelude::*;
use dioxus_router::Link;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::chrome::{logo_url, SiteFooter, SiteHeader};
use crate::config::RuntimeConfig;
use crate::routes::Route;

/// Pointer offsets are scaled into `[-PARALLAX_RANGE / 2, PARALLAX_RANGE / 2]`.
const PARALLAX_RANGE: f64 = 15.0;
const LOGO_TILT: f64 = 1.7;

#[cfg(target_arch = "wasm32")]
const SECTION_THRESHOLD: f64 = 0.3;
#[cfg(target_arch = "wasm32")]
const SECTION_ROOT_MARGIN: &str = "-20% 0px -20% 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeSection {
    Intro,
    Services,
    Project,
}

impl HomeSection {
    pub const ALL: [HomeSection; 3] = [HomeSection::Intro, HomeSection::Services, HomeSection::Project];

    pub fn id(self) -> &'static str {
        match self {
            HomeSection::Intro => "inicio",
            HomeSection::Services => "servicios",
            HomeSection::Project => "proyecto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeSection::Intro => "Inicio",
            HomeSection::Services => "Servicios",
            HomeSection::Project => "Juegos",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            HomeSection::Intro => "⌂",
            HomeSection::Services => "✦",
            HomeSection::Project => "🎮",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// Offset of a pointer coordinate from the center of `extent`, scaled to the parallax range.
pub fn parallax_offset(client: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent - 0.5) * PARALLAX_RANGE
}

pub fn logo_transform(offset: PointerOffset) -> String {
    let scale = 1.0 + (offset.x + offset.y).abs() * 0.001;
    format!(
        "perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg) scale({scale:.4})",
        offset.x * LOGO_TILT,
        -offset.y * LOGO_TILT,
    )
}

#[cfg(target_arch = "wasm32")]
struct PointerListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

struct Service {
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    summary: &'static str,
    highlight: &'static str,
    points: [&'static str; 3],
}

const SERVICES: [Service; 3] = [
    Service {
        title: "VR Gaming",
        icon: "🎮",
        accent: "rose",
        summary: "Videojuegos inmersivos con física realista y multijugador.",
        highlight: "Meta Quest, PSVR2",
        points: ["Acción, deportes y aventura", "Física hiperrealista", "Modo multijugador online"],
    },
    Service {
        title: "Entrenamiento VR",
        icon: "🎓",
        accent: "violet",
        summary: "Simulaciones profesionales médicas e industriales.",
        highlight: "Reducción de riesgos 90%",
        points: ["Procedimientos médicos", "Seguridad industrial", "Certificaciones oficiales"],
    },
    Service {
        title: "VR Corporativo",
        icon: "🏢",
        accent: "amber",
        summary: "Tours virtuales, showrooms y eventos interactivos.",
        highlight: "360° inmersión total",
        points: ["Tours inmobiliarios VR", "Showrooms de productos", "Eventos virtuales"],
    },
];

#[component]
pub fn HomePage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut active_section = use_signal(|| HomeSection::Intro);
    let pointer = use_signal(PointerOffset::default);
    #[cfg(target_arch = "wasm32")]
    let mut pointer_listener = use_signal(|| None::<PointerListener>);
    #[cfg(target_arch = "wasm32")]
    let mut section_observer = use_signal(|| None::<SectionObserver>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if pointer_listener.read().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        tracing::debug!("home: attach pointer listener");
        let mut on_move_pointer = pointer;
        let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|value| value.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|value| value.as_f64()).unwrap_or(0.0);
            on_move_pointer.set(PointerOffset {
                x: parallax_offset(event.client_x() as f64, width),
                y: parallax_offset(event.client_y() as f64, height),
            });
        }) as Box<dyn FnMut(_)>));
        let _ = window.add_event_listener_with_callback(
            "mousemove",
            closure.as_ref().as_ref().unchecked_ref(),
        );
        pointer_listener.set(Some(PointerListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if section_observer.read().is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        tracing::debug!("home: observe sections");
        let mut on_section = active_section;
        let closure = Rc::new(Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(section) = HomeSection::from_id(&entry.target().id()) {
                        on_section.set(section);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(SECTION_THRESHOLD));
        options.set_root_margin(SECTION_ROOT_MARGIN);
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };
        for section in HomeSection::ALL {
            if let Some(element) = document.get_element_by_id(section.id()) {
                observer.observe(&element);
            }
        }
        section_observer.set(Some(SectionObserver {
            observer,
            _closure: closure,
        }));
    });

    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        if let Some(listener) = pointer_listener.read().as_ref() {
            if let Some(window) = web_sys::window() {
                tracing::debug!("home: detach pointer listener");
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        }
        if let Some(handle) = section_observer.read().as_ref() {
            handle.observer.disconnect();
        }
    });

    let logo = logo_url(&config);
    let offset = pointer();
    let logo_style = format!("transform: {};", logo_transform(offset));
    let backdrop_style = format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y);

    rsx! {
        document::Title { "NextZone VR Studio" }
        document::Meta { name: "description", content: "Experiencias VR que revolucionan: videojuegos, simulaciones de entrenamiento y experiencias inmersivas." }
        div { class: "page home-page",
            div { class: "home-backdrop",
                div { class: "home-backdrop-gradient" }
                div { class: "home-backdrop-vignette", style: "{backdrop_style}" }
            }
            div { class: "home-grid-pattern" }
            aside { class: "home-sidebar",
                nav { class: "home-sidebar-nav", aria_label: "Secciones de la página",
                    for section in HomeSection::ALL {
                        div { key: "{section.id()}", class: "home-sidebar-item",
                            a {
                                href: "#{section.id()}",
                                class: if active_section() == section { "home-sidebar-link active" } else { "home-sidebar-link" },
                                aria_label: "{section.label()}",
                                onclick: move |_| active_section.set(section),
                                "{section.icon()}"
                            }
                            span { class: "home-sidebar-tooltip", "{section.label()}" }
                        }
                    }
                }
            }
            div { class: "home-content",
                SiteHeader {}
                section { id: HomeSection::Intro.id(), class: "home-hero",
                    div { class: "home-hero-logo",
                        img { src: "{logo}", alt: "NextZone VR", style: "{logo_style}" }
                    }
                    h1 { class: "home-hero-title",
                        span { class: "gradient-text", "Experiencias VR" }
                        br {}
                        span { class: "home-hero-subtitle", "Que Revolucionan" }
                    }
                    p { class: "home-hero-copy",
                        "Desarrollamos "
                        span { class: "accent-rose", "videojuegos VR" }
                        ", "
                        span { class: "accent-blue", "simulaciones de entrenamiento" }
                        " y "
                        span { class: "accent-orange", "experiencias inmersivas" }
                        " con tecnología de última generación"
                    }
                    a { href: "#{HomeSection::Project.id()}", class: "button-gradient", "Nuestros Proyectos →" }
                    div { class: "home-stats",
                        div { p { class: "home-stat-value", "1+" } p { class: "muted", "Proyectos VR" } }
                        div { p { class: "home-stat-value", "Meta Quest" } p { class: "muted", "Compatible" } }
                        div { p { class: "home-stat-value", "Unity" } p { class: "muted", "Engine" } }
                    }
                }
                section { id: HomeSection::Services.id(), class: "home-services",
                    div { class: "section-heading",
                        span { class: "pill", "✦ Especialidades" }
                        h2 { class: "gradient-text", "¿Qué Creamos?" }
                        p { class: "muted", "Soluciones de realidad virtual para entretenimiento, educación e industria." }
                    }
                    div { class: "services-grid",
                        for service in SERVICES.iter() {
                            div { key: "{service.title}", class: "card service-card {service.accent}",
                                div { class: "service-icon", "{service.icon}" }
                                h3 { class: "card-title", "{service.title}" }
                                p { class: "muted", "{service.summary}" }
                                p { class: "service-highlight", "{service.highlight}" }
                                ul { class: "service-points",
                                    for point in service.points {
                                        li { key: "{point}", "▸ {point}" }
                                    }
                                }
                            }
                        }
                    }
                }
                section { id: HomeSection::Project.id(), class: "home-project",
                    div { class: "section-heading",
                        span { class: "pill", "▶ Destacado" }
                        h2 { class: "gradient-text", "Virtual Knockout" }
                        p { class: "muted", "El juego de boxeo VR más realista del mercado" }
                    }
                    div { class: "card project-card",
                        div { class: "project-card-visual",
                            div { class: "project-card-icon", "🥊" }
                            p { "Combate VR Realista" }
                        }
                        div { class: "project-card-body",
                            h3 { class: "card-title", "Virtual Knockout" }
                            p { class: "muted",
                                "Disfruta combates uno a uno con un sistema de stamina, combos dinámicos y un oponente desafiante."
                            }
                            ul { class: "project-card-facts",
                                li { "Motor Unity" }
                                li { "Compatible Meta Quest 2/3, PSVR2" }
                            }
                            div { class: "tags",
                                span { class: "tag violet", "Unity Engine" }
                                span { class: "tag rose", "Meta Quest" }
                            }
                            Link { to: Route::Game {}, class: "button-gradient wide", "Ver Desarrollo Completo →" }
                        }
                    }
                    SiteFooter {}
                }
            }
        }
    }
}
