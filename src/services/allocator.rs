//! Account number allocation
//!
//! Numbers are handed out by scanning upward from a configured base and
//! taking the first one with no record on disk.

use tracing::debug;

use crate::error::{BankError, BankResult};
use crate::models::AccountId;
use crate::storage::AccountStore;

/// Finds unused account numbers in a store
///
/// The allocator remembers where its last scan ended, so repeated calls
/// never hand out the same number twice even before the account is saved.
/// Numbers freed below that point are only found again by a new allocator.
pub struct IdAllocator<'s, S: AccountStore + ?Sized> {
    store: &'s S,
    cursor: Option<AccountId>,
}

impl<'s, S: AccountStore + ?Sized> IdAllocator<'s, S> {
    /// Start scanning at `base`
    pub fn new(store: &'s S, base: AccountId) -> Self {
        Self {
            store,
            cursor: Some(base),
        }
    }

    /// Return the next account number with no record
    ///
    /// # Errors
    ///
    /// [`BankError::IdsExhausted`] once the 8-digit range is used up.
    pub fn next_id(&mut self) -> BankResult<AccountId> {
        while let Some(candidate) = self.cursor {
            self.cursor = candidate.next();
            if !self.store.exists(candidate)? {
                debug!(account = %candidate, "allocated account number");
                return Ok(candidate);
            }
        }
        Err(BankError::IdsExhausted)
    }
}
