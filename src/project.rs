use dioxus::prelude::*;
use dioxus_router::Link;

use crate::chrome::{SiteFooter, SiteHeader};
use crate::routes::Route;

const PREVIEWS: [(&str, &str, &str); 3] = [
    ("📊", "blue", "Estadísticas detalladas"),
    ("🎯", "red", "Metas y objetivos"),
    ("📈", "pink", "Progreso en tiempo real"),
];

#[component]
pub fn ProjectPage() -> Element {
    rsx! {
        document::Title { "Proyecto | NextZone VR Studio" }
        document::Meta { name: "description", content: "Esta sección está siendo desarrollada." }
        div { class: "page project-page",
            SiteHeader {}
            div { class: "coming-soon",
                div { class: "coming-soon-icon",
                    span { class: "coming-soon-wrench", "🔧" }
                    span { class: "coming-soon-clock", "⏱" }
                }
                h1 { class: "coming-soon-title gradient-text", "¡Próximamente!" }
                p { class: "coming-soon-lead", "Esta sección está siendo desarrollada" }
                p { class: "muted",
                    "Estamos trabajando arduamente para traerte una experiencia increíble. "
                    span { class: "accent-blue", "¡Mantente atento!" }
                }
                div { class: "coming-soon-previews",
                    for (icon, accent, label) in PREVIEWS {
                        div { key: "{label}", class: "card preview-card {accent}",
                            span { class: "preview-icon", "{icon}" }
                            p { "{label}" }
                        }
                    }
                }
                p { class: "muted small",
                    "Mientras tanto, puedes explorar nuestro "
                    Link { to: Route::Game {}, class: "inline-link", "juego VR de boxeo" }
                }
            }
            SiteFooter {}
        }
    }
}
