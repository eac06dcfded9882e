//! Calendar date resolution for loosely formatted input.

pub mod resolver;

#[cfg(test)]
mod props;

pub use resolver::{DateResolver, RawDate, SlashOrder};
