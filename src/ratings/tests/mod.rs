// src/ratings/tests/mod.rs
