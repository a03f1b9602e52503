//! Clean use case - idempotent removal of build artifacts

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanOutcome, CleanResult, CleanedPath};
pub use use_case::CleanUseCase;
