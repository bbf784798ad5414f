mod markup;
mod session;

pub use markup::*;
pub use session::*;
