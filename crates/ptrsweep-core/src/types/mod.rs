mod address;
mod cidr;
mod input;
mod output;

pub use address::*;
pub use cidr::*;
pub use input::*;
pub use output::*;
