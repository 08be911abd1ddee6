//! Error types.
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Returned by [`Router::switch_to`](crate::router::Router::switch_to) when the
/// requested id names no registered page. The router state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no page containers were declared")]
    Empty,
    #[error("a page container has an empty id")]
    BlankId,
    #[error("page `{0}` is declared more than once")]
    DuplicatePage(String),
    #[error("page `{0}` is not registered")]
    NotFound(String),
}

/// Startup failures. Only the router can fail startup; decorative widgets log
/// and skip themselves instead.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dom error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
