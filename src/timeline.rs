use crate::media::MediaItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub media: &'static [MediaItem],
}

impl TimelineEntry {
    pub fn image_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.media.iter().filter_map(|item| match item {
            MediaItem::Image { path } => Some(*path),
            MediaItem::Video { .. } => None,
        })
    }
}

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        id: 1,
        title: "La Idea",
        description: "Queríamos un juego de boxeo VR simple pero intenso",
        media: &[
            MediaItem::image("timeline/idea-boceto.svg"),
            MediaItem::image("timeline/idea-referencias.svg"),
        ],
    },
    TimelineEntry {
        id: 2,
        title: "Sketching",
        description: "Definimos la temática y los objetivos: reflejos rápidos, golpes potentes y diversión directa",
        media: &[
            MediaItem::image("timeline/sketch-ring.svg"),
            MediaItem::image("timeline/sketch-oponente.svg"),
            MediaItem::youtube("QMEVDcjxyuA"),
        ],
    },
    TimelineEntry {
        id: 3,
        title: "Las Pruebas",
        description: "Mejoramos el juego gracias a los comentarios de nuestros compañeros para que fuera más divertido y cómodo",
        media: &[
            MediaItem::legacy_video(Some("timeline/pruebas-video.svg")),
            MediaItem::image("timeline/pruebas-equipo.svg"),
            MediaItem::image("timeline/pruebas-quest.svg"),
            MediaItem::image("timeline/pruebas-stamina.svg"),
        ],
    },
    TimelineEntry {
        id: 4,
        title: "Primer Round",
        description: "La primera versión jugable: un oponente, un sistema de stamina y combos dinámicos",
        media: &[MediaItem::legacy_video(None)],
    },
];

pub fn timeline() -> &'static [TimelineEntry] {
    TIMELINE
}
