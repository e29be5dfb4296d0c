pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod gate;
pub mod host;
pub mod lifecycle;
pub mod paint;
pub mod scheduler;
pub mod sizing;

pub use animation::*;
pub use config::NexusConfig;
pub use error::*;
pub use field::*;
pub use gate::VisibilityGate;
pub use host::*;
pub use lifecycle::*;
pub use paint::*;
pub use scheduler::*;
pub use sizing::*;
