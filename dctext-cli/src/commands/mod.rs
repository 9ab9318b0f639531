//! CLI command implementations

mod formats;
mod inspect;
mod run;
mod validate;

pub use formats::formats;
pub use inspect::inspect;
pub use run::run;
pub use validate::validate;
