pub mod change;

pub use change::{execute, run};
