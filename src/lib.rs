pub mod frontend;

pub use frontend::{evaluate, evaluate_or_default};
