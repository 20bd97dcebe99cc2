pub mod buckets;
pub mod engine;
pub mod errors;
pub mod filters;
pub mod hints;
pub mod models;
pub mod scheduler;
pub mod stats;
pub mod store;

pub use buckets::*;
pub use engine::*;
pub use errors::*;
pub use filters::*;
pub use hints::*;
pub use models::*;
pub use scheduler::*;
pub use stats::*;
pub use store::*;
