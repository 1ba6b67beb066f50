use thiserror::Error;

/// Errors that can occur while producing or delivering an exported image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to allocate a {width}x{height} export surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export file: {0}")]
    Write(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Errors that can occur while loading the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
