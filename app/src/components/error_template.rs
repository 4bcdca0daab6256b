//! Standardized error page used as the router fallback.
//!
//! `AppError` carries the application-level errors (currently only Not
//! Found); the component renders them and, on the server, sets the matching
//! HTTP status code on the response.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders a generic error page based on the provided errors.
///
/// Designed for Leptos error boundaries: `outside_errors` takes priority
/// (server-side rendering), otherwise the reactive `errors` signal is used.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| panic!("No Errors found and we expected errors!")),
        |e| RwSignal::new(e),
    );
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // On the server, set the HTTP response status code based on the first error.
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    div()
        .class("grid place-content-center px-4 h-full antialiased")
        .child((
            h1().class("mb-6 text-center")
                .child(if errors.len() > 1 { "Errores" } else { "Error" }),
            errors
                .into_iter()
                .map(|error| {
                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest text-gray-400 uppercase")
                            .child(format!("{} | {error}", error.status_code())),
                        div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-[#ffef5c]")
                            .child(A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(move || "Volver al inicio"))
                                .build())),
                    ))
                })
                .collect_view(),
        ))
}
