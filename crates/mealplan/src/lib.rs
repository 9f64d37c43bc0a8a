mod catalog;
mod entry;
mod macros;
mod store;
mod suggest;
mod summary;

pub use catalog::*;
pub use entry::*;
pub use macros::*;
pub use store::*;
pub use suggest::*;
pub use summary::*;
