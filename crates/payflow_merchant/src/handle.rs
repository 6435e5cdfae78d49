// --- File: crates/payflow_merchant/src/handle.rs ---
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::MerchantError;

/// Holds the process-wide payments client once it has been configured.
///
/// Set exactly once, read many times. Workflows take the client out of the
/// handle at construction, so tests can bypass it and pass a mock directly.
pub struct ClientHandle<C> {
    cell: OnceCell<Arc<C>>,
}

impl<C> ClientHandle<C> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Stores `client`. A second call fails and leaves the first client in place.
    pub fn initialize(&self, client: C) -> Result<Arc<C>, MerchantError> {
        let client = Arc::new(client);
        if self.cell.set(Arc::clone(&client)).is_err() {
            warn!("Payments client initialization attempted twice");
            return Err(MerchantError::AlreadyInitialized);
        }
        info!("Payments client initialized");
        Ok(client)
    }

    pub fn get(&self) -> Result<Arc<C>, MerchantError> {
        self.cell.get().cloned().ok_or(MerchantError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<C> Default for ClientHandle<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_initialize() {
        let handle: ClientHandle<String> = ClientHandle::new();
        assert!(!handle.is_initialized());
        assert!(matches!(handle.get(), Err(MerchantError::NotInitialized)));
    }

    #[test]
    fn test_initialize_once() {
        static HANDLE: ClientHandle<String> = ClientHandle::new();

        let first = HANDLE.initialize("first".to_string()).unwrap();
        assert_eq!(*first, "first");

        let err = HANDLE.initialize("second".to_string()).unwrap_err();
        assert_eq!(err.kind(), "InitializationError");
        assert_eq!(*HANDLE.get().unwrap(), "first");
    }
}
