//! Contract module
//!
//! Contract read model, clause renegotiation on the contract market and the
//! contract summary view.

mod market;
mod model;
mod summary;


pub use market::*;
pub use model::*;
pub use summary::*;
