//! Tokio Runtime Bridge
//!
//! The page host is synchronous; the user list fetch needs tokio for reqwest.
//! This module owns a process-wide runtime and lets synchronous code drive
//! futures on it.
//!
//! ## Pattern
//!
//! ```text
//! block_on(app.ready())
//!       │
//!       ▼
//! UserListLoader::load()
//!       │
//!       ▼
//! run_in_tokio(api.fetch_users())
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to the loader
//! ```

use std::future::Future;
use std::sync::{Mutex, OnceLock};
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Serializes runtime creation so only one runtime is ever built
static TOKIO_RUNTIME_INIT: Mutex<()> = Mutex::new(());

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(rt) = TOKIO_RUNTIME.get() {
        return Ok(rt);
    }

    let _init = TOKIO_RUNTIME_INIT
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(rt) = TOKIO_RUNTIME.get() {
        return Ok(rt);
    }
    let rt = Runtime::new()?;
    Ok(TOKIO_RUNTIME.get_or_init(|| rt))
}

/// Execute a future in the tokio runtime and await its result
///
/// Works from any async context, including a different runtime: only the
/// join handle is awaited by the caller.
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Invalid {
            message: format!("Tokio task cancelled: {e}"),
        }),
    }
}

/// Block on a future synchronously
///
/// **Warning**: This blocks the current thread. Must not be called from inside
/// the runtime itself.
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}
