use crate::registry::Category;

// One bit per category.
const _: () = assert!(Category::COUNT <= u16::BITS as usize);

/// Categories already reported for the file being validated.
///
/// Bits are only ever set. A fresh set is created for each file and dropped
/// once the file has been validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet(u16);

impl CategorySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= 1 << category.index();
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & (1 << category.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
