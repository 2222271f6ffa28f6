use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("Failed to access storage key `{0}`")]
    Access(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, StorageError> {
        web_sys::window().ok_or(StorageError::NoWindow)
    }

    fn local_storage() -> Result<Storage, StorageError> {
        window()?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Access(key.to_string()))
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Access(key.to_string()))
    }
}

// Host builds have no browser; keep an in-memory store per thread so tests stay isolated.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use super::StorageError;
    use std::{cell::RefCell, collections::HashMap};

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
        Ok(ITEMS.with(|items| items.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| {
            items
                .borrow_mut()
                .insert(key.to_string(), value.to_string())
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), StorageError> {
        ITEMS.with(|items| items.borrow_mut().remove(key));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use backend::window;
pub use backend::{get_item, remove_item, set_item};
