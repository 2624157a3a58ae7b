/// Narrow error set: nothing in the motion core does I/O, so only surface
/// acquisition, browser glue and config parsing can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    SurfaceUnavailable(String),
    InvalidConfig(String),
    Browser(String),
}

impl std::fmt::Display for MotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionError::SurfaceUnavailable(msg) => write!(f, "Surface Unavailable: {}", msg),
            MotionError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
            MotionError::Browser(msg) => write!(f, "Browser Error: {}", msg),
        }
    }
}

impl std::error::Error for MotionError {}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        MotionError::InvalidConfig(err.to_string())
    }
}

pub type SurfaceResult<T> = Result<T, MotionError>;
pub type ConfigResult<T> = Result<T, MotionError>;
