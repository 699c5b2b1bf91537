use super::error::BencodeError;
use crate::constants::{
    CHILD_STORE_GROWTH_DENOMINATOR, CHILD_STORE_GROWTH_NUMERATOR, CHILD_STORE_INITIAL_CAPACITY,
};

/// Append-only storage for the children of a list or dictionary.
///
/// Starts empty, allocates [`CHILD_STORE_INITIAL_CAPACITY`] slots on the first
/// push and grows by 3/2 each time it fills up. Reallocation moves the
/// children, so nested containers keep their own storage untouched.
pub(crate) struct ChildStore<T> {
    items: Vec<T>,
}

impl<T> ChildStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) -> Result<(), BencodeError> {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            let grown = if capacity == 0 {
                CHILD_STORE_INITIAL_CAPACITY
            } else {
                (capacity * CHILD_STORE_GROWTH_NUMERATOR / CHILD_STORE_GROWTH_DENOMINATOR)
                    .max(capacity + 1)
            };
            self.items
                .try_reserve_exact(grown - self.items.len())
                .map_err(|_| BencodeError::AllocationFailed)?;
        }
        self.items.push(item);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }
}
