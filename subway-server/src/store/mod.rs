//! In-memory storage for stations and lines.
//!
//! Assigns numeric ids, enforces name uniqueness and stamps records with
//! creation and modification times. Shared between request handlers.

mod error;
mod subway;

pub use error::StoreError;
pub use subway::{Audit, LineId, LineView, StoredLine, StoredStation, SubwayStore};
