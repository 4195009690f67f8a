#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::model::RecordId;

/// Record ids ticked by the user. Survives page navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    /// Header checkbox: `true` selects exactly the displayed page, `false` clears everything
    #[inline]
    pub fn select_all<'a, I>(&mut self, checked: bool, displayed: I)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        self.ids.clear();
        if checked {
            self.ids.extend(displayed.into_iter().cloned());
        }
    }

    #[inline]
    pub fn toggle_one(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// Header checkbox state.
    ///
    /// Compares counts only, so ids selected on another page still count.
    #[inline]
    pub fn is_all_selected(&self, displayed_len: usize) -> bool {
        self.ids.len() == displayed_len
    }

    #[inline]
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order
    #[inline]
    pub fn to_vec(&self) -> Vec<RecordId> {
        self.ids.iter().cloned().collect()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop the given ids, e.g. after they were deleted
    #[inline]
    pub fn remove_all(&mut self, removed: &[RecordId]) {
        for id in removed {
            self.ids.remove(id);
        }
    }
}
