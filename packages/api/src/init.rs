//! Server initialization for the admin console.

use backend::BackendError;
use dioxus::prelude::ServerFnError;
use tokio::sync::OnceCell;

static INIT: OnceCell<()> = OnceCell::const_new();

/// Initialize the backend client from the environment, once.
///
/// Every server function calls this before touching a repository.
pub async fn ensure_initialized() -> Result<(), BackendError> {
    INIT.get_or_try_init(|| async {
        tracing::info!("Initializing backend client...");
        backend::init_from_env()?;
        tracing::info!("Backend client initialized");
        Ok::<(), BackendError>(())
    })
    .await
    .map(|_| ())
}

/// `ensure_initialized` with the error mapped for a server function.
pub(crate) async fn ready() -> Result<(), ServerFnError> {
    ensure_initialized()
        .await
        .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))
}

/// Log a failed backend call and turn it into a server function error.
pub(crate) fn backend_failure(action: &'static str) -> impl FnOnce(BackendError) -> ServerFnError {
    move |e| {
        tracing::warn!("Failed to {}: {}", action, e);
        ServerFnError::new(format!("Failed to {}: {}", action, e))
    }
}
