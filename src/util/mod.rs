// src/util/mod.rs
pub mod hasher;
pub mod testing;
pub mod text;
