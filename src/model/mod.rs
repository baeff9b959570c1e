pub mod bindings;
pub mod conversion;
pub mod node;
pub mod output;
pub mod rule;

pub use bindings::*;
pub use conversion::*;
pub use node::*;
pub use output::*;
pub use rule::*;
