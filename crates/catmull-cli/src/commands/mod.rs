//! Command implementations for splinectl CLI

pub mod inspect;
pub mod layout;
pub mod pack;
pub mod sample;
