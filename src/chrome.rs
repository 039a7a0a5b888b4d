use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::config::RuntimeConfig;
use crate::media::asset_url;
use crate::routes::Route;

const LOGO_PATH: &str = "nextzone.svg";

const ACTIVE_LINK: &str = "nav-link active";
const IDLE_LINK: &str = "nav-link";

pub fn nav_link_class(current: &Route, target: &Route) -> &'static str {
    if current == target {
        ACTIVE_LINK
    } else {
        IDLE_LINK
    }
}

pub fn logo_url(config: &RuntimeConfig) -> String {
    asset_url(&config.base_path, LOGO_PATH)
}

#[component]
pub fn Navigation() -> Element {
    let current = use_route::<Route>();
    let links = [
        (Route::Home {}, "Inicio"),
        (Route::Game {}, "Juego"),
        (Route::Project {}, "Proyecto"),
    ]
    .map(|(target, label)| (nav_link_class(&current, &target), target, label));
    rsx! {
        div { class: "nav-links", role: "navigation", aria_label: "Secciones del sitio",
            for (class, target, label) in links {
                Link {
                    key: "{label}",
                    class: "{class}",
                    to: target,
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let config = use_context::<RuntimeConfig>();
    let logo = logo_url(&config);
    rsx! {
        header { class: "site-header",
            nav { class: "site-header-inner",
                div { class: "site-header-brand",
                    Link { to: Route::Home {}, class: "brand",
                        img { class: "brand-logo", src: "{logo}", alt: "Logo" }
                        div {
                            h1 { class: "brand-title", "NEXTZONE" }
                            p { class: "brand-subtitle", "VR Studio" }
                        }
                    }
                }
                div { class: "site-header-nav",
                    Navigation {}
                }
                div { class: "site-header-aside" }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let config = use_context::<RuntimeConfig>();
    let logo = logo_url(&config);
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner",
                div { class: "site-footer-brand",
                    img { class: "footer-logo", src: "{logo}", alt: "NextZone VR" }
                    div {
                        p { class: "brand-title", "NEXTZONE" }
                        p { class: "muted", "Virtual Reality Studio" }
                        p { class: "muted small", "Unity • Meta Quest • PSVR2" }
                    }
                }
                div { class: "site-footer-course",
                    p { class: "brand-title", "NEXTZONE" }
                    p { class: "muted small", "Curso de Interacción Humano-Computadora" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_the_current_route_is_active() {
        let current = Route::Game {};
        assert_eq!(nav_link_class(&current, &Route::Game {}), ACTIVE_LINK);
        assert_eq!(nav_link_class(&current, &Route::Home {}), IDLE_LINK);
        assert_eq!(nav_link_class(&current, &Route::Project {}), IDLE_LINK);
    }

    #[test]
    fn not_found_highlights_nothing() {
        let current = Route::NotFound {
            route: vec!["nosotros".to_string()],
        };
        for target in [Route::Home {}, Route::Game {}, Route::Project {}] {
            assert_eq!(nav_link_class(&current, &target), IDLE_LINK);
        }
    }

    #[test]
    fn logo_follows_base_path() {
        let config = RuntimeConfig {
            base_path: "/IHC-pagina-web/".to_string(),
        };
        assert_eq!(logo_url(&config), "/IHC-pagina-web/nextzone.svg");
    }
}
