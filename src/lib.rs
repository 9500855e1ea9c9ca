pub mod cli;
pub mod input;
pub mod payload;
pub mod webhook;
