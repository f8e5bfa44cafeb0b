#![forbid(unsafe_code)]

use super::super::StoreError;

const MAX_NAME_LEN: usize = 255;
const MAX_TITLE_LEN: usize = 500;

pub(crate) fn normalize_collection_name(raw: &str) -> Result<String, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::InvalidInput("name must not be empty"));
    }
    if raw.len() > MAX_NAME_LEN {
        return Err(StoreError::InvalidInput("name too long"));
    }
    Ok(raw.to_string())
}

pub(crate) fn normalize_title(raw: &str) -> Result<String, StoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::InvalidInput("title must not be empty"));
    }
    if raw.len() > MAX_TITLE_LEN {
        return Err(StoreError::InvalidInput("title too long"));
    }
    Ok(raw.to_string())
}
