mod fetch;
pub use fetch::*;
