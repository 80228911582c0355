//! Opaque handles for model entities.

/// Handle to a decision variable in a [`Model`](crate::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create a handle from a raw index.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw index.
    pub fn inner(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a constraint row in a [`Model`](crate::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ConstraintId(u32);

impl ConstraintId {
    /// Create a handle from a raw index.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw index.
    pub fn inner(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstraintId, VariableId};

    #[test]
    fn variable_id_roundtrip() {
        let id = VariableId::new(7);
        assert_eq!(id.inner(), 7);
    }

    #[test]
    fn constraint_id_roundtrip() {
        let id = ConstraintId::new(11);
        assert_eq!(id.inner(), 11);
    }
}
