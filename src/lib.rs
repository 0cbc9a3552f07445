#![doc = include_str!("../README.md")]

pub use errors::*;
pub use filterer::{FilterOptions, Filterer};
pub use kernels::{Kernel, KernelType};
pub use partition::RowBand;

mod errors;
mod filterer;
pub mod images;
mod kernels;
mod partition;
mod sampling;
