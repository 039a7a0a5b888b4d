use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link, Routable, Router};

use crate::chrome::SiteHeader;
use crate::config::{use_runtime_config, RuntimeConfig};
use crate::game::GamePage;
use crate::home::HomePage;
use crate::project::ProjectPage;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "NextZone VR Studio" }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "page loading",
                h1 { "Cargando..." }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#0B0F1A" }
        Router::<Route> {}
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/juego")]
    Game {},
    #[route("/proyecto")]
    Project {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn Game() -> Element {
    rsx! { GamePage {} }
}

#[component]
fn Project() -> Element {
    rsx! { ProjectPage {} }
}

impl Route {
    /// Parses a browser path that still carries the deploy prefix of `base_path`.
    pub fn from_prefixed_path(path: &str, base_path: &str) -> Option<Route> {
        let base = base_path.trim_matches('/');
        let path = path.trim_start_matches('/');
        let inner = if base.is_empty() {
            path
        } else {
            path.strip_prefix(base)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .unwrap_or(path)
        };
        format!("/{}", inner.trim_start_matches('/')).parse::<Route>().ok()
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let config = use_context::<RuntimeConfig>();
    let navigator = use_navigator();
    let path = route.join("/");
    let redirect = Route::from_prefixed_path(&path, &config.base_path)
        .filter(|target| !matches!(target, Route::NotFound { .. }));
    let pending = redirect.clone();
    use_effect(move || {
        if let Some(target) = pending.clone() {
            tracing::debug!("router: {target} reached with its deploy prefix");
            navigator.replace(target);
        }
    });

    if redirect.is_some() {
        return rsx! {};
    }

    rsx! {
        document::Title { "Página no encontrada | NextZone VR Studio" }
        div { class: "page not-found-page",
            SiteHeader {}
            div { class: "not-found",
                h1 { class: "gradient-text", "404" }
                p { "Esta página no existe." }
                p { class: "muted", "Ruta: /{path}" }
                Link { to: Route::Home {}, class: "button-gradient", "Volver al inicio" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_paths() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!("/juego".parse::<Route>().ok(), Some(Route::Game {}));
        assert_eq!("/proyecto".parse::<Route>().ok(), Some(Route::Project {}));
    }

    #[test]
    fn unknown_paths_render_not_found() {
        assert_eq!(
            "/nosotros".parse::<Route>().ok(),
            Some(Route::NotFound {
                route: vec!["nosotros".to_string()]
            })
        );
    }

    #[test]
    fn deploy_prefix_is_stripped_before_matching() {
        let base = "/IHC-pagina-web/";
        assert_eq!(
            Route::from_prefixed_path("/IHC-pagina-web/juego", base),
            Some(Route::Game {})
        );
        assert_eq!(
            Route::from_prefixed_path("IHC-pagina-web/proyecto", base),
            Some(Route::Project {})
        );
        assert_eq!(Route::from_prefixed_path("/IHC-pagina-web", base), Some(Route::Home {}));
        assert_eq!(Route::from_prefixed_path("/juego", "/"), Some(Route::Game {}));
    }

    #[test]
    fn lookalike_prefix_is_not_stripped() {
        assert_eq!(
            Route::from_prefixed_path("/IHC-pagina-webx/juego", "/IHC-pagina-web/"),
            Some(Route::NotFound {
                route: vec!["IHC-pagina-webx".to_string(), "juego".to_string()]
            })
        );
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Game {}.to_string(), "/juego");
        assert_eq!(Route::Project {}.to_string(), "/proyecto");
    }
}
