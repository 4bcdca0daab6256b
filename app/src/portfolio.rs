//! The portfolio page: a filterable grid of projects.
//!
//! The catalog is fetched once into a resource; every project becomes a grid
//! entry carrying its category. Filtering only toggles entry visibility, so
//! the grid never rebuilds on a filter change. Activating an entry opens the
//! detail modal for that project id.

use icondata::{BsChevronDown, BsEye};
use leptos::{
    ev,
    html::{button, div, h3, li, p, span, ul},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    api::select_projects,
    categories::{self, CATEGORIES},
    components::loader,
    filter::{ALL_CATEGORIES, is_visible},
    media, modal,
    types::Project,
};

/// Renders the portfolio grid with its filter controls and detail modal.
///
/// Reactive state:
/// - `active_category`: the currently selected filter, shared by the button
///   group and the dropdown so the two surfaces can never disagree.
/// - `selected_project`: the id shown in the detail modal, `None` when closed.
/// - `catalog`: fetched once; failures degrade to an empty catalog and the
///   filter controls still initialize (an empty grid, never an error state).
pub fn component() -> impl IntoView {
    let active_category = RwSignal::new(ALL_CATEGORIES.to_owned());
    let selected_project = RwSignal::new(None::<u32>);
    let dropdown_open = RwSignal::new(false);

    let catalog = Resource::new_blocking(
        || (),
        move |()| async move {
            select_projects().await.unwrap_or_else(|err| {
                leptos::logging::error!("Error cargando portfolio: {err}");
                Vec::new()
            })
        },
    );
    let projects = Signal::derive(move || catalog.get().unwrap_or_default());

    div().child((
        Title(
            TitleProps::builder()
                .text("Javiera Troncoso \u{2013} Portfolio Creativo")
                .build(),
        ),
        filter_bar(active_category, dropdown_open),
        Suspense(
            SuspenseProps::builder()
                .fallback(|| loader::component)
                .children(TypedChildren::to_children(move || {
                    ul().class("grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3 project-list")
                        .child(For(ForProps::builder()
                            .each(move || projects.get())
                            .key(|project: &Project| project.id)
                            .children(move |project| {
                                project_entry(&project, active_category, selected_project)
                            })
                            .build()))
                }))
                .build(),
        ),
        modal::component(projects, selected_project),
    ))
}

fn project_entry(
    project: &Project,
    active_category: RwSignal<String>,
    selected_project: RwSignal<Option<u32>>,
) -> AnyView {
    let category = project.category.clone();
    let label = categories::label_for(&project.category).to_owned();
    let id = project.id;

    li().class("project-item")
        .attr("data-category", project.category.clone())
        .class(("hidden", move || {
            !active_category.with(|active| is_visible(active, &category))
        }))
        .child(
            button()
                .class("flex flex-col w-full text-left cursor-pointer group project-link")
                .on(ev::click, move |_| selected_project.set(Some(id)))
                .child((
                    div().class("overflow-hidden relative mb-3 h-48 rounded-xl project-img bg-card")
                        .child((
                            div().class("flex absolute inset-0 z-10 justify-center items-center opacity-0 transition-opacity duration-300 project-item-icon-box group-hover:opacity-100 bg-black/40")
                                .child(media::icon(BsEye, "text-white size-8")),
                            media::grid_fragment(project),
                        )),
                    h3().class("text-base font-semibold project-title")
                        .child(project.title.clone()),
                    p().class("text-sm text-gray-400 project-category").child(label),
                )),
        )
        .into_any()
}

/// The two filter surfaces: a button group on wide screens and a
/// dropdown-style selector on small ones. Both write `active_category`, and
/// every active indicator derives from it, so selecting through either
/// surface keeps the other in sync. A dropdown category without a matching
/// button simply leaves the button group with nothing highlighted.
fn filter_bar(active_category: RwSignal<String>, dropdown_open: RwSignal<bool>) -> AnyView {
    (
        div().class("hidden flex-wrap gap-2 mb-6 text-sm sm:flex filter-buttons").child((
            filter_button(ALL_CATEGORIES, "Todos", active_category),
            CATEGORIES
                .iter()
                .map(|(id, label)| filter_button(id, label, active_category))
                .collect_view(),
        )),
        div().class("relative mb-6 text-sm sm:hidden filter-select").child((
            button()
                .class("flex justify-between items-center py-2 px-4 w-full rounded-lg cursor-pointer bg-card")
                .on(ev::click, move |_| dropdown_open.update(|open| *open = !*open))
                .child((
                    span().child(move || {
                        active_category.with(|active| selected_label(active).to_owned())
                    }),
                    media::icon(BsChevronDown, "size-4"),
                )),
            ul().class("absolute z-20 mt-1 w-full rounded-lg shadow-lg bg-card")
                .class(("hidden", move || !dropdown_open.get()))
                .child((
                    dropdown_item(ALL_CATEGORIES, "Todos", active_category, dropdown_open),
                    CATEGORIES
                        .iter()
                        .map(|(id, label)| dropdown_item(id, label, active_category, dropdown_open))
                        .collect_view(),
                )),
        )),
    )
        .into_any()
}

fn filter_button(id: &'static str, label: &'static str, active: RwSignal<String>) -> AnyView {
    button()
        .class("py-1 px-3 rounded-lg transition-all duration-300 cursor-pointer hover:text-black hover:bg-white")
        .class(("bg-white", move || active.with(|a| a == id)))
        .class(("text-black", move || active.with(|a| a == id)))
        .on(ev::click, move |_| active.set(id.to_owned()))
        .child(label)
        .into_any()
}

fn dropdown_item(
    id: &'static str,
    label: &'static str,
    active: RwSignal<String>,
    dropdown_open: RwSignal<bool>,
) -> AnyView {
    li().child(
        button()
            .class("py-2 px-4 w-full text-left cursor-pointer hover:bg-white/10")
            .on(ev::click, move |_| {
                active.set(id.to_owned());
                dropdown_open.set(false);
            })
            .child(label),
    )
    .into_any()
}

/// Label shown in the dropdown trigger for the active filter.
fn selected_label(active: &str) -> &str {
    if active == ALL_CATEGORIES {
        "Todos"
    } else {
        categories::label_for(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_trigger_labels_the_active_filter() {
        assert_eq!(selected_label(ALL_CATEGORIES), "Todos");
        assert_eq!(selected_label("fotografia"), "Fotografía");
    }

    #[test]
    fn custom_categories_label_verbatim() {
        assert_eq!(selected_label("ceramica"), "ceramica");
    }

    #[test]
    fn every_table_category_gets_a_filter_button() {
        // The button group is generated from the same table the resolver
        // uses, so labels and buttons cannot drift apart.
        for (id, label) in CATEGORIES {
            assert_eq!(categories::label_for(id), label);
        }
    }
}
