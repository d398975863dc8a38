use oauthsign_core::{Context, OsEnv};
use oauthsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Context sending through a default [`reqwest::Client`] and reading the OS environment.
pub fn default_context() -> Context {
    default_context_with_client(Client::new())
}

/// Context sending through the given [`reqwest::Client`] and reading the OS environment.
pub fn default_context_with_client(client: Client) -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv)
}
