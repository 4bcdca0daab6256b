//! Loading spinner shown while the catalog is being fetched.

use icondata::BsArrowRepeat;
use leptos::{
    html::{div, p},
    prelude::*,
    svg::svg,
};

/// Renders an animated spinner with a "Cargando..." message.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-1 justify-center items-center py-16 m-auto")
        .child((
            svg()
                .attr("viewBox", BsArrowRepeat.view_box)
                .attr("innerHTML", BsArrowRepeat.data)
                .class("animate-spin size-8"),
            p().class("text-sm italic text-gray-400").child("Cargando..."),
        ))
}
