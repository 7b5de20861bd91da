//! Service layer for simple-bank
//!
//! Services sit between the CLI and storage: they normalize and validate
//! input, apply transfers, allocate account numbers, write the audit log and
//! send account emails.

pub mod account;
pub mod allocator;
pub mod transfer;

pub use account::AccountService;
pub use allocator::IdAllocator;
pub use transfer::{TransferReceipt, TransferService};
