/// Errors that stop a run before or during discovery.
///
/// Per-component failures never surface here; they are recorded in the manifest.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing credential: set {0} or pass --api-key")]
    MissingCredential(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to write manifest: {0}")]
    Manifest(String),
}
