pub mod config;
pub mod modules;
pub mod shared;

pub use modules::cv;
pub use modules::navigation;

#[cfg(test)]
mod tests;
