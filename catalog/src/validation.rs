use crate::domain::{ProductDraft, ProductPayload};
use shared::{Error, Result};

const MIN_NAME_LEN: usize = 3;

/// V1 policy: presence checks only, exactly what the stable implementation
/// has always done. A zero price is rejected, a negative one is not.
pub fn lenient(payload: &ProductPayload) -> Result<ProductDraft> {
    let name_ok = payload.name.as_deref().is_some_and(|name| !name.is_empty());
    let price_ok = payload.price.is_some_and(|price| price != 0.0);

    if !name_ok || !price_ok {
        return Err(Error::Validation(vec![
            "Name and price are required".to_string(),
        ]));
    }

    Ok(draft_from(payload))
}

/// V2 policy: every violation is collected so the client sees the complete
/// defect list in one response. An empty name reports both the presence and
/// the length violation.
pub fn strict(payload: &ProductPayload) -> Result<ProductDraft> {
    let mut errors = Vec::new();

    let name = payload.name.as_deref().unwrap_or("");
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }
    if name.chars().count() < MIN_NAME_LEN {
        errors.push(format!(
            "Name must be at least {MIN_NAME_LEN} characters long"
        ));
    }

    match payload.price {
        None => errors.push("Price is required".to_string()),
        Some(price) if !price.is_finite() || price <= 0.0 => {
            errors.push("Price must be a positive number".to_string());
        }
        Some(_) => {}
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    Ok(draft_from(payload))
}

fn draft_from(payload: &ProductPayload) -> ProductDraft {
    ProductDraft {
        name: payload.name.clone().unwrap_or_default(),
        price: payload.price.unwrap_or_default(),
        description: payload.description.clone().unwrap_or_default(),
    }
}
