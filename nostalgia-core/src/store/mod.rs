mod store;
mod store_error;

pub use store::Store;
pub use store_error::StoreError;
