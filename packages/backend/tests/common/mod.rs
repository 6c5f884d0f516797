use std::sync::LazyLock;

use tokio::sync::{Mutex, MutexGuard};
use wiremock::MockServer;

use backend::{BackendConfig, BackendError};

static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Point the global backend client at a fresh mock server.
///
/// The guard serializes tests, since they share the global client.
pub async fn setup_backend() -> Result<(MutexGuard<'static, ()>, MockServer), BackendError> {
    let guard = TEST_LOCK.lock().await;
    let server = MockServer::start().await;
    backend::init_backend(BackendConfig::default().with_endpoint(server.uri()))?;
    Ok((guard, server))
}
