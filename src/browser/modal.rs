use crate::model::Record;

/// Record detail dialog. Holds a snapshot of the clicked record while open.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    record: Option<Record>,
}

impl DetailModal {
    #[inline]
    pub fn open(&mut self, record: &Record) {
        self.record = Some(record.clone());
    }

    #[inline]
    pub fn close(&mut self) -> bool {
        self.record.take().is_some()
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        self.record.is_some()
    }

    /// The snapshot, present only while the dialog is open
    #[inline]
    pub const fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }
}
