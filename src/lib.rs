#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// Token ledger
pub mod token;

// Exchange modules
pub mod exchange;
pub mod errors;
pub mod events;
pub mod math;
