/// Marker for a request that presented the admin API token.
///
/// Only the token's trailing characters are kept, for request logs.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub token_fingerprint: String,
}
