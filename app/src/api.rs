//! Server functions for the portfolio application.
//!
//! The catalog is a static JSON file read on the server. There is exactly one
//! read path and no write path; the file is re-read per request and the
//! client caches the result in a resource for the lifetime of the page.

use leptos::prelude::{ServerFnError, server};

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

use crate::types::Project;

/// Fetches the project catalog.
///
/// Reads and parses the catalog JSON configured in [`crate::types::AppState`].
/// The read is wrapped in the shared retry helper; parse failures are not
/// retried since the file content will not change between attempts.
///
/// # Returns
///
/// A `Result` containing the ordered `Vec<Project>` on success, or a
/// `ServerFnError` on read or parse failure. Callers degrade to an empty
/// catalog on error.
#[server(endpoint = "/projects")]
pub async fn select_projects() -> Result<Vec<Project>, ServerFnError> {
    use crate::types::{AppState, CatalogFile};
    use leptos::prelude::expect_context;
    use shared_utils::{Backoff, with_backoff};

    let AppState { catalog_path, .. } = expect_context::<AppState>();

    let raw = with_backoff("select_projects", Backoff::default(), || async {
        tokio::fs::read_to_string(catalog_path.as_ref()).await
    })
    .await
    .map_err(|e| {
        tracing::error!(path = %catalog_path.display(), "Failed to read catalog: {e}");
        ServerFnError::<NoCustomError>::ServerError(format!("Catalog read error: {e}"))
    })?;

    let catalog: CatalogFile = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(path = %catalog_path.display(), "Failed to parse catalog: {e}");
        ServerFnError::<NoCustomError>::ServerError(format!("Catalog parse error: {e}"))
    })?;

    Ok(catalog.projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogFile;

    /// The endpoint signature is part of the client/server contract.
    #[test]
    fn test_server_fn_signatures() {
        let _: fn() -> _ = select_projects;
    }

    #[test]
    fn catalog_file_parses_the_expected_shape() {
        let raw = r#"{"projects":[{"id":1,"title":"A","category":"fotografia","type":"image","image":"a.jpg"}]}"#;
        let catalog: CatalogFile = serde_json::from_str(raw).unwrap();

        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.projects[0].title, "A");
    }

    #[test]
    fn malformed_catalog_fails_to_parse() {
        let raw = r#"{"projects": "not-a-list"}"#;
        assert!(serde_json::from_str::<CatalogFile>(raw).is_err());
    }
}
