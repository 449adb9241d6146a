mod breakpoint;
mod detection;
mod device_category;
mod input;
mod orientation;
mod profile;

pub use breakpoint::*;
pub use detection::*;
pub use device_category::*;
pub use input::*;
pub use orientation::*;
pub use profile::*;
