//! Crate-level error type.

/// Failures while wiring behaviors to the page.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// `window` or `document` is unavailable (non-browser host).
    #[error("browser environment unavailable")]
    NoBrowser,

    /// A required element is absent from the markup.
    #[error("missing element #{id}")]
    MissingElement { id: String },

    /// A DOM call threw.
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },

    /// The JSON override block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl PortfolioError {
    /// Wrap a thrown JS value with the call that produced it.
    pub fn js(context: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { context, message }
    }
}

#[cfg(feature = "hydrate")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(err: PortfolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
