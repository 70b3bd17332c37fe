use super::Registry;
use crate::{
    schema::name::DEFAULT_SCHEMA, Document, DocumentMapping, DocumentType, Result,
};

use doctable_core::{bail, err};
use indexmap::IndexMap;
use std::sync::Arc;

type Configure = Box<dyn Fn(&mut DocumentMapping) -> Result<()>>;

#[derive(Default)]
pub struct Builder {
    /// Schema every mapping is created in
    schema_name: Option<String>,

    /// Registered document types keyed by name, in registration order
    types: IndexMap<String, DocumentType>,

    /// Configuration to apply once the mappings exist, in call order
    configure: Vec<(String, Configure)>,
}

impl Builder {
    /// Sets the schema for all mappings. Defaults to `public`.
    pub fn schema_name(&mut self, schema_name: &str) -> &mut Self {
        self.schema_name = Some(schema_name.to_string());
        self
    }

    pub fn register<T: Document>(&mut self) -> &mut Self {
        self.register_type(T::document_type())
    }

    /// Registers a document type described by hand. Registering the same type
    /// again keeps the first registration.
    pub fn register_type(&mut self, document_type: DocumentType) -> &mut Self {
        if !self.types.contains_key(&document_type.name) {
            self.types.insert(document_type.name.clone(), document_type);
        }
        self
    }

    /// Registers `T` if needed and queues `f` to run against its mapping
    /// every time the registry is built.
    pub fn configure<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Document,
        F: Fn(&mut DocumentMapping) -> Result<()> + 'static,
    {
        let document_type = T::document_type();
        let name = document_type.name.clone();

        self.register_type(document_type);
        self.configure.push((name, Box::new(f)));
        self
    }

    /// Creates every mapping and applies the queued configuration. The
    /// builder is left untouched, so building again yields an equal registry.
    ///
    /// Fails on the first configuration error, or when two document types end
    /// up sharing a storage table.
    pub fn build(&self) -> Result<Registry> {
        let schema_name = self.schema_name.as_deref().unwrap_or(DEFAULT_SCHEMA);

        let mut mappings = IndexMap::with_capacity(self.types.len());

        for (name, document_type) in &self.types {
            let mapping = DocumentMapping::with_schema(document_type.clone(), schema_name)
                .map_err(|e| e.context(err!("failed to map document type `{name}`")))?;
            mappings.insert(name.clone(), mapping);
        }

        for (name, configure) in &self.configure {
            let Some(mapping) = mappings.get_mut(name) else {
                bail!("document type `{name}` was configured but never registered");
            };

            configure(mapping).map_err(|e| e.context(err!("failed to configure `{name}`")))?;
        }

        let mut tables = IndexMap::<String, &str>::new();
        for (name, mapping) in &mappings {
            let table = mapping.qualified_table_name();
            if let Some(existing) = tables.get(&table) {
                bail!("document types `{existing}` and `{name}` both map to table `{table}`");
            }
            tables.insert(table, name);
        }

        tracing::debug!(
            schema = %schema_name,
            mappings = mappings.len(),
            "built document registry"
        );

        Ok(Registry {
            mappings: mappings
                .into_iter()
                .map(|(name, mapping)| (name, Arc::new(mapping)))
                .collect(),
        })
    }
}
