//! The display synchronizer: the token row shown to the user, one token per
//! applied operation, in circuit order.

use crate::core::QuantalizerError;

/// Leading character of every rotation token (`Rx`, `Ry`, `Rz`).
pub const ROTATION_MARKER: char = 'R';
/// Suffix of the dagger tokens (`S†`, `T†`).
pub const DAGGER_MARKER: char = '†';

/// Ordered display tokens mirroring a `CircuitState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    tokens: Vec<&'static str>,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the token of one successfully applied operation.
    pub fn record(&mut self, token: &'static str) {
        self.tokens.push(token);
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The display row as one string, e.g. `"xhSTRx"`.
    pub fn text(&self) -> String {
        self.tokens.concat()
    }

    /// Logical length recovered from the concatenated text alone.
    ///
    /// Each rotation and dagger token is two characters for one operation, so
    /// every marker occurrence is subtracted from the character count.
    pub fn reconciled_length(&self) -> usize {
        reconcile(&self.text())
    }

    /// Checks the buffer holds exactly one token per operation.
    ///
    /// # Errors
    /// `QuantalizerError::DisplayDesync` when either the token count or the
    /// character reconciliation disagrees with `operations`.
    pub fn verify(&self, operations: usize) -> Result<(), QuantalizerError> {
        if self.len() != operations || self.reconciled_length() != operations {
            return Err(QuantalizerError::DisplayDesync {
                tokens: self.len(),
                operations,
            });
        }
        Ok(())
    }

    /// Checks that recording `token` after `operations` operations keeps the
    /// buffer in sync, without recording it.
    ///
    /// # Errors
    /// `QuantalizerError::DisplayDesync` when the buffer is already out of
    /// sync or `token` does not reconcile to exactly one operation.
    pub fn check_append(&self, operations: usize, token: &str) -> Result<(), QuantalizerError> {
        self.verify(operations)?;
        if reconcile(token) != 1 {
            return Err(QuantalizerError::DisplayDesync {
                tokens: self.len() + 1,
                operations: operations + 1,
            });
        }
        Ok(())
    }
}

/// Counts logical operations in a concatenated display string.
pub fn reconcile(text: &str) -> usize {
    let characters = text.chars().count();
    let markers = text
        .chars()
        .filter(|c| *c == ROTATION_MARKER || *c == DAGGER_MARKER)
        .count();
    characters - markers
}
