//! Configuration

pub mod schegen;

pub use schegen::SchegenConfig;
