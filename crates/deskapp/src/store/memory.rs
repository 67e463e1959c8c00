use super::mem_backend::MemBackend;
use super::StateStore;

pub type InMemoryStore = StateStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        StateStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Record, RecordKind};
    use crate::sidebar::OpenGroups;
    use crate::store::backend::{StateBackend, StorageScope};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_open_group(self, label: &str) -> Self {
            let mut groups = self.store.open_groups().unwrap();
            groups.open(label);
            self.store.save_open_groups(&groups).unwrap();
            self
        }

        /// Session history as if `records` were created oldest first.
        pub fn with_created(self, kind: RecordKind, records: &[Record]) -> Self {
            for record in records {
                self.store.push_created(kind, record).unwrap();
            }
            self
        }

        /// Store raw text, bypassing JSON encoding.
        pub fn with_raw(self, scope: StorageScope, key: &str, raw: &str) -> Self {
            self.store.backend().write(scope, key, raw).unwrap();
            self
        }

        pub fn open_groups(&self) -> OpenGroups {
            self.store.open_groups().unwrap()
        }
    }
}
