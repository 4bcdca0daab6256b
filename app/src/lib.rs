// Core application modules and components
use crate::components::{error_template, header, icons, scroll_top, sidebar};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
mod categories;
mod components;
mod contact;
mod filter;
mod media;
mod modal;
mod portfolio;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("es").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Javiera Troncoso \u{2013} Portfolio Creativo")
                    .build(),
            ),
        )),
        body().class("bg-[#1e1e1e]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto text-white font-poppins">
                {header::component}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto mt-16 max-w-4xl md:px-0">
                    {sidebar::component}
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=portfolio::component ssr=SsrMode::InOrder/>
                        <Route path=StaticSegment("contact") view=contact::component/>
                    </FlatRoutes>
                </main>
                {scroll_top::component}
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-4 bg-[#1e1e1e]/80 backdrop-blur-md")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child((
                p().class("text-gray-400").child((
                    "Hecho por",
                    a()
                        .href("https://www.instagram.com/jtroncoso.art/")
                        .class("hover:underline text-[#ffef5c]")
                        .child(" jtroncoso"),
                    format!(" \u{a9} {}", Utc::now().year()),
                )),
                div().class("block md:hidden").child(icons::component),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        // Test shell function with default options
        let options = LeptosOptions::builder().output_name("portfolio").build();
        let shell_view = shell(options);
        // We can't easily test the rendered content without a full Leptos
        // context, but we can verify the function executes without panicking
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        // Following Leptos best practices: test logic separately, not component rendering
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("portfolio").build();
        assert_eq!(options.site_addr.port(), 3000); // Default port
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1"); // Default IP
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_functions_integration() {
        use crate::api::select_projects;

        // Verify the server function signature hasn't drifted
        let _projects_fn: fn() -> _ = select_projects;
    }
}
