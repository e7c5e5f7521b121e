#![no_std]

pub mod access;
pub mod admin;
pub mod events;
pub mod storage;
pub mod token;
pub mod types;
pub mod validation;

pub use token::{ExoToken, ExoTokenClient};
pub use types::*;
