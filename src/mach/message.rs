use crate::lang::Category;

/// ## Messages from active comments
///
/// Holds at most one pending text per category. A later comment of the
/// same category on a line replaces the earlier one. Empty text counts
/// as nothing pending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    slots: [String; 4],
}

impl Messages {
    pub fn assign(&mut self, category: Category, text: String) {
        self.slots[category.index()] = text;
    }

    /// Retrieves the pending text of a category and clears it.
    pub fn take(&mut self, category: Category) -> Option<String> {
        let slot = &mut self.slots[category.index()];
        if slot.is_empty() {
            None
        } else {
            Some(std::mem::take(slot))
        }
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        let slot = &self.slots[category.index()];
        if slot.is_empty() {
            None
        } else {
            Some(slot)
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
    }

    /// The first category with pending text, in retrieval order.
    pub fn first(&self) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| !self.slots[category.index()].is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Takes every pending message in retrieval order.
    pub fn drain(&mut self) -> Vec<(Category, String)> {
        Category::ALL
            .iter()
            .filter_map(|category| self.take(*category).map(|text| (*category, text)))
            .collect()
    }
}
