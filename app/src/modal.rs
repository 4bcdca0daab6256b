//! The project detail view: a modal overlay showing one project's full
//! information, plus the nested image zoom sub-overlay.
//!
//! The view is driven by a single `RwSignal<Option<u32>>` holding the
//! selected project id. Opening an unknown id is a silent no-op because the
//! catalog lookup yields nothing to render. All modal content derives
//! reactively from the selected project, so re-opening never leaks content
//! from a previous open.

use icondata::BsXLg;
use leptos::{
    ev,
    html::{button, div, h2, img, p, span},
    prelude::*,
};
use web_sys::wasm_bindgen::JsCast as _;

use crate::categories;
use crate::media::{self, ZoomRequest, icon};
use crate::types::{Project, find_project};

/// The textual regions of the detail view, resolved from a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailContent {
    pub title: String,
    pub category_label: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

pub(crate) fn detail_content(project: &Project) -> DetailContent {
    DetailContent {
        title: project.title.clone(),
        category_label: categories::label_for(&project.category).to_owned(),
        description: project.description.clone(),
        technologies: project.technologies.clone().unwrap_or_default(),
    }
}

/// Renders the detail modal (and its zoom sub-overlay) for the project
/// selected in `selected`. Nothing is rendered while `selected` is `None`
/// or names an id absent from the catalog.
pub fn component(
    projects: Signal<Vec<Project>>,
    selected: RwSignal<Option<u32>>,
) -> impl IntoView {
    let zoom = RwSignal::new(None::<ZoomRequest>);

    let project = Memo::new(move |_| {
        selected
            .get()
            .and_then(|id| projects.with(|list| find_project(list, id).cloned()))
    });

    // Escape closes the zoom overlay first, then the modal itself. The
    // listener is registered from an effect so it only exists on the client.
    Effect::new(move |_| {
        window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                if zoom.get_untracked().is_some() {
                    zoom.set(None);
                } else if selected.get_untracked().is_some() {
                    close_detail(selected);
                }
            }
        });
    });

    (
        move || {
            project
                .get()
                .map(|project| detail_view(&project, selected, zoom))
        },
        zoom_overlay(zoom),
    )
}

fn detail_view(
    project: &Project,
    selected: RwSignal<Option<u32>>,
    zoom: RwSignal<Option<ZoomRequest>>,
) -> AnyView {
    let content = detail_content(project);

    div()
        .id("project-modal")
        .class("flex overflow-y-auto fixed inset-0 z-40 justify-center items-center p-4 bg-black/80")
        // Backdrop click closes; the dialog below stops propagation so
        // clicks inside the content never reach this handler.
        .on(ev::click, move |_| close_detail(selected))
        .child(
            div()
                .class("relative p-6 w-full max-w-3xl text-white rounded-2xl portfolio-modal bg-[#1e1e1e]")
                .on(ev::click, |event| event.stop_propagation())
                .child((
                    button()
                        .class("flex absolute top-4 right-4 justify-center items-center w-10 h-10 rounded-full transition-colors bg-black/40 hover:bg-black/70")
                        .attr("aria-label", "Cerrar")
                        .on(ev::click, move |_| close_detail(selected))
                        .child(icon(BsXLg, "size-5")),
                    div()
                        .class("mb-4 modal-media")
                        .child(media::modal_fragment(project, zoom)),
                    h2().class("mb-1 text-2xl font-bold modal-title")
                        .child(content.title),
                    p().class("mb-3 text-sm modal-category text-[#ffef5c]")
                        .child(content.category_label),
                    p().class("mb-4 text-gray-300 modal-description")
                        .child(content.description.unwrap_or_default()),
                    div().class("flex flex-wrap gap-2 modal-technologies").child(
                        content
                            .technologies
                            .into_iter()
                            .map(|tech| {
                                span()
                                    .class("py-1 px-2 text-xs rounded-lg technology-tag bg-card")
                                    .child(tech)
                            })
                            .collect_view(),
                    ),
                )),
        )
        .into_any()
}

/// A transient full-screen overlay showing one image at larger scale. It is
/// mounted only while a request is pending, so closing removes it entirely
/// and repeated opens cannot accumulate listeners.
fn zoom_overlay(zoom: RwSignal<Option<ZoomRequest>>) -> impl IntoView {
    move || {
        zoom.get().map(|request| {
            div()
                .class("flex fixed inset-0 justify-center items-center cursor-zoom-out zoom-overlay bg-black/95 z-[60]")
                .on(ev::click, move |_| zoom.set(None))
                .child((
                    img()
                        .src(request.src)
                        .alt(request.title)
                        .class("object-contain rounded-lg shadow-2xl max-w-[95%] max-h-[95%]")
                        .on(ev::click, |event| event.stop_propagation()),
                    button()
                        .class("flex absolute top-5 right-5 justify-center items-center w-12 h-12 text-white rounded-full transition-colors bg-black/50 hover:bg-black/80")
                        .attr("aria-label", "Cerrar")
                        .on(ev::click, move |event| {
                            event.stop_propagation();
                            zoom.set(None);
                        })
                        .child(icon(BsXLg, "size-6")),
                ))
                .into_any()
        })
    }
}

fn close_detail(selected: RwSignal<Option<u32>>) {
    stop_modal_videos();
    selected.set(None);
}

/// Pause and rewind any videos inside the modal before it goes away.
/// Harmless when the modal holds no video.
fn stop_modal_videos() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(videos) = document.query_selector_all("#project-modal video") else {
        return;
    };
    for index in 0..videos.length() {
        if let Some(node) = videos.item(index) {
            if let Ok(video) = node.dyn_into::<web_sys::HtmlVideoElement>() {
                let _ = video.pause();
                video.set_current_time(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;

    fn pdf_project() -> Project {
        Project {
            id: 2,
            title: "B".to_owned(),
            category: "diseno-grafico".to_owned(),
            media: MediaKind::Pdf,
            pdf: Some("b.pdf".to_owned()),
            description: Some("Manual de marca.".to_owned()),
            technologies: Some(vec!["Illustrator".to_owned(), "InDesign".to_owned()]),
            ..Default::default()
        }
    }

    #[test]
    fn detail_content_resolves_category_label() {
        let content = detail_content(&pdf_project());

        assert_eq!(content.title, "B");
        assert_eq!(content.category_label, "Diseño Gráfico");
        assert_eq!(content.description.as_deref(), Some("Manual de marca."));
        assert_eq!(content.technologies, vec!["Illustrator", "InDesign"]);
    }

    #[test]
    fn detail_content_rebuild_is_idempotent() {
        let project = pdf_project();
        assert_eq!(detail_content(&project), detail_content(&project));
    }

    #[test]
    fn unknown_category_is_shown_verbatim() {
        let project = Project {
            category: "ceramica".to_owned(),
            ..pdf_project()
        };

        assert_eq!(detail_content(&project).category_label, "ceramica");
    }

    #[test]
    fn missing_optional_fields_yield_empty_regions() {
        let project = Project {
            id: 7,
            title: "Sin extras".to_owned(),
            category: "fotografia".to_owned(),
            ..Default::default()
        };
        let content = detail_content(&project);

        assert_eq!(content.description, None);
        assert!(content.technologies.is_empty());
    }

    #[test]
    fn open_is_a_noop_for_unknown_ids() {
        let catalog = vec![pdf_project()];
        // The component renders nothing when the lookup misses, so the
        // modal stays closed.
        assert!(find_project(&catalog, 99).is_none());
        assert!(find_project(&catalog, 2).is_some());
    }
}
