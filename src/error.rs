use thiserror::Error;

#[derive(Error, Debug)]
pub enum JustifiedError {
    #[error("Could not read manifest: {0}")]
    IO(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] manifest::ManifestError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, JustifiedError>;
