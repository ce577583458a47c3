mod v1;
mod v2;

pub use v1::ProductServiceV1;
pub use v2::{ListOutcome, ListQuery, ProductServiceV2};

use crate::domain::ProductId;
use crate::store::StoreError;
use shared::Error;

pub(crate) fn store_err(context: &'static str) -> impl FnOnce(StoreError) -> Error {
    move |err| Error::Store {
        context: context.to_string(),
        detail: err.to_string(),
    }
}

pub(crate) fn not_found(id: ProductId) -> Error {
    Error::NotFound(format!("No product exists with ID {id}"))
}
