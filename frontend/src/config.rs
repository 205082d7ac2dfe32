/// Base URL of the backend, baked in at build time. Empty means same origin,
/// which is how the bundle runs when the backend serves it from STATIC_DIR.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url.trim_end_matches('/'),
        None => "",
    }
}
