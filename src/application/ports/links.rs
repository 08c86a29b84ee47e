/// Builds the URL a client follows to reach another page.
///
/// The paginator only produces cursor tokens; turning a token into a link is
/// the transport's job.
pub trait PageLinks: Send + Sync {
    fn page_url(&self, cursor_token: &str) -> String;
}
