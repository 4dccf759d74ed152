/// The backend occasionally hands out plain-http media URLs; mobile
/// webviews refuse them, so the client upgrades the scheme.
pub fn normalize_image_url(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
