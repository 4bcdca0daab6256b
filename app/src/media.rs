//! Media rendering for portfolio projects.
//!
//! Each media kind gets one plan per context: the grid shows a teaser, the
//! modal shows the full interactive view. Planning is pure; the render
//! functions turn a plan into a view. The two contexts intentionally differ
//! in richness and must not be unified.

use icondata::{BsBox, BsDownload, BsFileEarmarkText, BsImage, BsSearch};
use leptos::{
    ev,
    html::{a, button, div, h4, iframe, img, p, source, video},
    prelude::*,
    svg::svg,
};

use crate::types::{MediaKind, Project};

/// Payload for the image zoom sub-overlay, produced by the modal image
/// fragment and consumed by the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomRequest {
    pub src: String,
    pub title: String,
}

/// What the grid cell of a project shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMedia {
    /// Lazy-loaded image; falls back to the generic load-error notice.
    Image { src: String, title: String },
    /// Muted, metadata-only video thumbnail.
    Video { src: String },
    /// The grid never embeds the PDF itself.
    PdfBadge { title: String },
    /// 3D preview image; falls back to the model badge, not the error notice.
    ModelPreview { src: String, title: String },
    ModelBadge { title: String },
}

/// What the modal media region of a project shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMedia {
    /// Click-to-zoom image plus a dedicated zoom button.
    Image { src: String, title: String },
    /// Controlled, autoplaying video with an optional poster.
    Video { src: String, poster: Option<String> },
    /// Download link plus an embedded viewer frame.
    Pdf { src: String, title: String },
    /// Download link for the raw asset plus a preview or placeholder.
    Model {
        asset: String,
        preview: Option<String>,
        title: String,
    },
}

#[must_use]
pub fn grid_plan(project: &Project) -> GridMedia {
    match project.media {
        MediaKind::Video => GridMedia::Video {
            src: project.video.clone().unwrap_or_default(),
        },
        MediaKind::Pdf => GridMedia::PdfBadge {
            title: project.title.clone(),
        },
        MediaKind::Model3D => match &project.preview {
            Some(preview) => GridMedia::ModelPreview {
                src: preview.clone(),
                title: project.title.clone(),
            },
            None => GridMedia::ModelBadge {
                title: project.title.clone(),
            },
        },
        MediaKind::Image => GridMedia::Image {
            src: project.image.clone().unwrap_or_default(),
            title: project.title.clone(),
        },
    }
}

#[must_use]
pub fn modal_plan(project: &Project) -> ModalMedia {
    match project.media {
        MediaKind::Video => ModalMedia::Video {
            src: project.video.clone().unwrap_or_default(),
            poster: project.poster.clone(),
        },
        MediaKind::Pdf => ModalMedia::Pdf {
            src: project.pdf.clone().unwrap_or_default(),
            title: project.title.clone(),
        },
        MediaKind::Model3D => ModalMedia::Model {
            asset: project.model3d.clone().unwrap_or_default(),
            preview: project.preview.clone(),
            title: project.title.clone(),
        },
        MediaKind::Image => ModalMedia::Image {
            src: project.image.clone().unwrap_or_default(),
            title: project.title.clone(),
        },
    }
}

/// Render the grid teaser for a project.
pub fn grid_fragment(project: &Project) -> AnyView {
    match grid_plan(project) {
        GridMedia::Video { src } => div()
            .class("overflow-hidden w-full h-full video-thumbnail")
            .child(
                video()
                    .attr("preload", "metadata")
                    .attr("muted", "true")
                    .class("object-cover w-full h-full")
                    .child(source().attr("src", src).attr("type", "video/mp4")),
            )
            .into_any(),
        GridMedia::PdfBadge { title } => pdf_badge(title),
        GridMedia::ModelPreview { src, title } => {
            // On load failure the preview degrades to the model badge. The
            // swap is signal-driven, so a second error event is harmless.
            let failed = RwSignal::new(false);
            let badge_title = title.clone();
            div()
                .class("w-full h-full image-container")
                .child(move || {
                    if failed.get() {
                        model_badge(badge_title.clone())
                    } else {
                        img()
                            .src(src.clone())
                            .alt(title.clone())
                            .attr("loading", "lazy")
                            .class("object-cover w-full h-full")
                            .on(ev::error, move |_| failed.set(true))
                            .into_any()
                    }
                })
                .into_any()
        }
        GridMedia::ModelBadge { title } => model_badge(title),
        GridMedia::Image { src, title } => {
            let failed = RwSignal::new(false);
            div()
                .class("w-full h-full image-container")
                .child(move || {
                    if failed.get() {
                        media_error_notice()
                    } else {
                        img()
                            .src(src.clone())
                            .alt(title.clone())
                            .attr("loading", "lazy")
                            .class("object-cover w-full h-full")
                            .on(ev::error, move |_| failed.set(true))
                            .into_any()
                    }
                })
                .into_any()
        }
    }
}

/// Render the full modal media view for a project. Image fragments write to
/// `zoom` to open the zoom sub-overlay.
pub fn modal_fragment(project: &Project, zoom: RwSignal<Option<ZoomRequest>>) -> AnyView {
    match modal_plan(project) {
        ModalMedia::Video { src, poster } => video()
            .class("w-full rounded-xl modal-video")
            .attr("controls", "true")
            .attr("autoplay", "true")
            .attr("poster", poster)
            .child(source().attr("src", src).attr("type", "video/mp4"))
            .into_any(),
        ModalMedia::Pdf { src, title } => div()
            .class("flex flex-col gap-4 modal-media-content")
            .child((
                a().href(src.clone())
                    .attr("download", format!("{title}.pdf"))
                    .class("inline-flex gap-2 items-center py-2 px-4 font-semibold rounded-lg bg-[#ffef5c] text-[#1e1e1e] w-fit")
                    .child((icon(BsDownload, "size-5"), " Descargar PDF")),
                iframe()
                    .attr("src", src)
                    .attr("title", title)
                    .class("w-full rounded-xl pdf-viewer h-[60vh]"),
            ))
            .into_any(),
        ModalMedia::Model {
            asset,
            preview,
            title,
        } => div()
            .class("flex flex-col gap-4 modal-media-content")
            .child((
                a().href(asset)
                    .attr("download", "")
                    .class("inline-flex gap-2 items-center py-2 px-4 font-semibold rounded-lg bg-[#ffef5c] text-[#1e1e1e] w-fit")
                    .child((icon(BsDownload, "size-5"), " Descargar Modelo 3D")),
                div().class("model3d-viewer").child(match preview {
                    Some(preview) => img()
                        .src(preview)
                        .alt(format!("Vista previa de {title}"))
                        .class("object-contain w-full h-full rounded-xl")
                        .into_any(),
                    None => div()
                        .class("flex flex-col gap-2 justify-center items-center p-10 rounded-xl bg-card")
                        .child((
                            icon(BsBox, "size-10"),
                            h4().class("font-semibold").child("Modelo 3D"),
                            p().child(title),
                        ))
                        .into_any(),
                }),
            ))
            .into_any(),
        ModalMedia::Image { src, title } => {
            let image_request = ZoomRequest {
                src: src.clone(),
                title: title.clone(),
            };
            let button_request = image_request.clone();
            div()
                .class("relative modal-image-container")
                .child((
                    img()
                        .src(src)
                        .alt(title)
                        .class("w-full h-auto rounded-xl cursor-zoom-in")
                        .on(ev::click, move |_| zoom.set(Some(image_request.clone()))),
                    button()
                        .class("flex absolute top-4 right-4 z-10 justify-center items-center w-10 h-10 text-white rounded-full transition-all duration-300 cursor-pointer bg-black/70 hover:bg-black/90 hover:scale-110")
                        .attr("aria-label", "Ampliar imagen")
                        .on(ev::click, move |event| {
                            event.stop_propagation();
                            zoom.set(Some(button_request.clone()));
                        })
                        .child(icon(BsSearch, "size-5")),
                ))
                .into_any()
        }
    }
}

fn pdf_badge(title: String) -> AnyView {
    div()
        .class("flex flex-col gap-1 justify-center items-center p-4 w-full h-full text-center pdf-preview bg-card")
        .child((
            icon(BsFileEarmarkText, "size-8"),
            div().class("text-sm font-semibold line-clamp-2").child(title),
            div().class("text-xs text-gray-400").child("Documento PDF"),
        ))
        .into_any()
}

fn model_badge(title: String) -> AnyView {
    div()
        .class("flex flex-col gap-1 justify-center items-center p-4 w-full h-full text-center model3d-preview bg-card")
        .child((
            icon(BsBox, "size-8"),
            div().class("text-sm font-semibold line-clamp-2").child(title),
            div().class("text-xs text-gray-400").child("Modelo 3D"),
        ))
        .into_any()
}

fn media_error_notice() -> AnyView {
    div()
        .class("flex flex-col gap-1 justify-center items-center p-4 w-full h-full text-center media-error bg-card")
        .child((
            icon(BsImage, "size-8"),
            p().class("text-xs text-gray-400").child("Error cargando imagen"),
        ))
        .into_any()
}

pub(crate) fn icon(icon: icondata::Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("innerHTML", icon.data)
        .class(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn video_project() -> Project {
        Project {
            id: 3,
            title: "Loop de apertura".to_owned(),
            category: "animacion-digital".to_owned(),
            media: MediaKind::Video,
            video: Some("loop.mp4".to_owned()),
            poster: Some("loop-poster.webp".to_owned()),
            ..Default::default()
        }
    }

    fn model_project(preview: Option<&str>) -> Project {
        Project {
            id: 4,
            title: "Escultura".to_owned(),
            category: "realidad-aumentada".to_owned(),
            media: MediaKind::Model3D,
            model3d: Some("escultura.glb".to_owned()),
            preview: preview.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn video_grid_plan_is_a_thumbnail() {
        assert_eq!(
            grid_plan(&video_project()),
            GridMedia::Video {
                src: "loop.mp4".to_owned()
            }
        );
    }

    #[test]
    fn video_modal_plan_carries_source_and_poster() {
        assert_eq!(
            modal_plan(&video_project()),
            ModalMedia::Video {
                src: "loop.mp4".to_owned(),
                poster: Some("loop-poster.webp".to_owned()),
            }
        );
    }

    #[test]
    fn pdf_grid_never_embeds_the_document() {
        let project = Project {
            id: 2,
            title: "B".to_owned(),
            category: "diseno-grafico".to_owned(),
            media: MediaKind::Pdf,
            pdf: Some("b.pdf".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            grid_plan(&project),
            GridMedia::PdfBadge {
                title: "B".to_owned()
            }
        );
        assert_eq!(
            modal_plan(&project),
            ModalMedia::Pdf {
                src: "b.pdf".to_owned(),
                title: "B".to_owned(),
            }
        );
    }

    #[test]
    fn model_without_preview_uses_badge_in_both_contexts() {
        let project = model_project(None);

        assert_matches!(grid_plan(&project), GridMedia::ModelBadge { .. });
        assert_matches!(
            modal_plan(&project),
            ModalMedia::Model { preview: None, .. }
        );
    }

    #[test]
    fn model_with_preview_shows_the_preview_image() {
        let project = model_project(Some("escultura-preview.webp"));

        assert_eq!(
            grid_plan(&project),
            GridMedia::ModelPreview {
                src: "escultura-preview.webp".to_owned(),
                title: "Escultura".to_owned(),
            }
        );
        assert_matches!(
            modal_plan(&project),
            ModalMedia::Model {
                preview: Some(_),
                ..
            }
        );
    }

    #[test]
    fn untyped_project_plans_as_image() {
        let project = Project {
            id: 5,
            title: "Costa".to_owned(),
            category: "fotografia".to_owned(),
            image: Some("costa.webp".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            grid_plan(&project),
            GridMedia::Image {
                src: "costa.webp".to_owned(),
                title: "Costa".to_owned(),
            }
        );
        assert_eq!(
            modal_plan(&project),
            ModalMedia::Image {
                src: "costa.webp".to_owned(),
                title: "Costa".to_owned(),
            }
        );
    }

    #[test]
    fn missing_media_fields_degrade_to_empty_sources() {
        let project = Project {
            id: 9,
            title: "Sin medios".to_owned(),
            category: "fotografia".to_owned(),
            media: MediaKind::Video,
            ..Default::default()
        };

        assert_eq!(
            modal_plan(&project),
            ModalMedia::Video {
                src: String::new(),
                poster: None,
            }
        );
    }

    #[test]
    fn fragment_builders_keep_their_signatures() {
        // Rendering itself needs a browser; pin the entry points instead.
        let _: fn(&Project) -> AnyView = grid_fragment;
        let _: fn(&Project, RwSignal<Option<ZoomRequest>>) -> AnyView = modal_fragment;
    }
}
