use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
};

/// Redirect `www.` hosts to the bare domain with a permanent redirect.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get("host")
        && let Ok(host) = host.to_str()
        && let Some(bare_host) = host.strip_prefix("www.")
    {
        if let Some(path_query) = req.uri().path_and_query() {
            let location = format!("https://{}{}", bare_host, path_query.as_str());
            let response = Response::builder()
                .status(StatusCode::MOVED_PERMANENTLY)
                .header("location", location)
                .body(Body::empty())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
            return Ok(response);
        }
    }
    Ok(next.run(req).await)
}
