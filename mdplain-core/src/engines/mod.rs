// mdplain-core/src/engines/mod.rs
//! Concrete implementations of the `ConversionEngine` trait.

pub mod regex_engine;
