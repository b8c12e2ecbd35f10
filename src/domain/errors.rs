use wasm_bindgen::JsValue;

/// Every failure the chart can report
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A draw call was rejected by the surface.
    RenderingError(String),
    /// Canvas element or its 2D context could not be obtained.
    ContextUnavailable(String),
    ConfigError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::ContextUnavailable(msg) => write!(f, "Context Unavailable: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

/// Exceptions thrown by browser APIs while drawing
impl From<JsValue> for AppError {
    fn from(err: JsValue) -> Self {
        AppError::RenderingError(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type RenderingResult<T> = Result<T, AppError>;
pub type ConfigResult<T> = Result<T, AppError>;
