//! Request guards applied by controllers before mutating data.

pub mod ownership;
