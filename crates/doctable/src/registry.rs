mod builder;
pub use builder::Builder;

use crate::{Document, DocumentMapping};

use doctable_sql::{Serializer, Statement};
use indexmap::IndexMap;
use std::sync::Arc;

/// Every document mapping known to an application.
///
/// A registry is assembled once by a [`Builder`] and is immutable afterwards.
/// Mappings are handed out as `Arc`s, so they can be shared across threads
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Mappings keyed by document type name, in registration order
    mappings: IndexMap<String, Arc<DocumentMapping>>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn mapping<T: Document>(&self) -> Option<Arc<DocumentMapping>> {
        self.mapping_for(&T::document_type().name)
    }

    pub fn mapping_for(&self, type_name: &str) -> Option<Arc<DocumentMapping>> {
        self.mappings.get(type_name).cloned()
    }

    pub fn mappings(&self) -> impl ExactSizeIterator<Item = &Arc<DocumentMapping>> + '_ {
        self.mappings.values()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Renders the storage table and upsert function of every mapping, in
    /// registration order.
    pub fn ddl(&self) -> Vec<String> {
        let serializer = Serializer::postgresql();

        self.mappings()
            .flat_map(|mapping| {
                [
                    Statement::create_table(&mapping.table()),
                    Statement::create_upsert(&mapping.upsert_function()),
                ]
            })
            .map(|stmt| serializer.serialize(&stmt))
            .collect()
    }
}
