//! Columnar component storage
//!
//! One column per component type. A slot is `None` when the entity at that
//! index does not carry the component.

/// Dense column of optional component values indexed by entity
#[derive(Debug, Clone)]
pub struct ComponentColumn<T> {
    slots: Vec<Option<T>>,
}

impl<T> ComponentColumn<T> {
    /// Create an empty column
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty column with room for `capacity` entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Store `value` at `index`, returning the previous value if any
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    /// Get the value at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    /// Get a mutable reference to the value at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Whether a value is stored at `index`
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Iterate over occupied slots
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T> Default for ComponentColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_grows_column() {
        let mut column = ComponentColumn::new();
        assert!(column.insert(3, 'c').is_none());

        assert_eq!(column.get(3), Some(&'c'));
        assert_eq!(column.get(0), None);
        assert_eq!(column.get(10), None);
        assert_eq!(column.count(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut column = ComponentColumn::new();
        column.insert(0, 1);
        assert_eq!(column.insert(0, 2), Some(1));
        assert_eq!(column.get(0), Some(&2));
    }

    #[test]
    fn test_iter_skips_empty_slots() {
        let mut column = ComponentColumn::with_capacity(4);
        column.insert(0, "a");
        column.insert(2, "c");

        let collected: Vec<_> = column.iter().collect();
        assert_eq!(collected, vec![(0, &"a"), (2, &"c")]);
    }

    #[test]
    fn test_get_mut() {
        let mut column = ComponentColumn::new();
        column.insert(1, 5.0);
        if let Some(value) = column.get_mut(1) {
            *value += 1.0;
        }
        assert_eq!(column.get(1), Some(&6.0));
        assert!(column.get_mut(7).is_none());
    }
}
