pub mod errors;
pub mod db;
pub mod store;
pub mod item;
pub mod stock_item;

/// Shared length/emptiness checks for externally supplied identifiers.
pub fn validate_public_id(field: &str, value: &str) -> Result<(), errors::ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} is required")));
    }
    if trimmed.len() > 64 {
        return Err(errors::ModelError::Validation(format!("{field} must be at most 64 characters")));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
