//! Public traits for the injection API.

mod injector;

pub use injector::{Injector, InjectorCore};
