//! Build use case - the freeze pipeline

mod options;
mod result;
mod use_case;


pub use options::BuildOptions;
pub use result::BuildReport;
pub use use_case::BuildUseCase;
