pub mod dominant;
pub mod pixel;
pub mod tally;

pub use dominant::*;
pub use pixel::*;
pub use tally::*;
