use super::{
    columns,
    db::{Table, UpsertFunction},
    field::{MemberRegistry, Resolver},
    name, Field, SchemaObjects,
};
use crate::{
    doc::{Document, DocumentType, Marker, Member},
    Error, Result,
};

use indexmap::IndexMap;

/// Maps one document type onto its storage table and upsert function.
///
/// A mapping is configured once (alias, duplicated fields, subclasses,
/// optimistic concurrency) and then only read. Names, the table and the upsert
/// function are recomputed from the current state on every read, so they
/// always reflect the latest configuration.
#[derive(Debug, Clone)]
pub struct DocumentMapping {
    document_type: DocumentType,

    /// Always ASCII-lowercase
    alias: String,

    /// Always ASCII-lowercase
    schema_name: String,

    /// Index of the primary key member in `document_type.members`
    id_member: usize,

    /// Lookup table over `document_type.members`
    members: MemberRegistry,

    /// Promoted fields keyed by declared member path, in registration order
    duplicated_fields: IndexMap<String, Field>,

    /// Registered variants keyed by type name, in registration order
    sub_classes: IndexMap<String, DocumentType>,

    use_optimistic_concurrency: bool,
}

impl DocumentMapping {
    pub const ID_COLUMN: &'static str = columns::ID;
    pub const DATA_COLUMN: &'static str = columns::DATA;
    pub const LAST_MODIFIED_COLUMN: &'static str = columns::LAST_MODIFIED;
    pub const VERSION_COLUMN: &'static str = columns::VERSION;
    pub const HOST_TYPE_COLUMN: &'static str = columns::HOST_TYPE;
    pub const DOCUMENT_TYPE_COLUMN: &'static str = columns::DOC_TYPE;

    /// Maps `document_type` into the default schema.
    pub fn new(document_type: DocumentType) -> Result<DocumentMapping> {
        DocumentMapping::with_schema(document_type, name::DEFAULT_SCHEMA)
    }

    pub fn with_schema(document_type: DocumentType, schema_name: &str) -> Result<DocumentMapping> {
        let id_member = identity_member(&document_type)?;
        let members = MemberRegistry::new(&document_type.members);
        let use_optimistic_concurrency =
            document_type.has_marker(Marker::UseOptimisticConcurrency);

        let mapping = DocumentMapping {
            alias: name::alias(&document_type.name),
            schema_name: schema_name.to_ascii_lowercase(),
            id_member,
            members,
            duplicated_fields: IndexMap::new(),
            sub_classes: IndexMap::new(),
            use_optimistic_concurrency,
            document_type,
        };

        tracing::debug!(
            document_type = %mapping.document_type.name,
            alias = %mapping.alias,
            schema = %mapping.schema_name,
            id_member = %mapping.id_member().name,
            "created document mapping"
        );

        Ok(mapping)
    }

    pub fn for_document<T: Document>() -> Result<DocumentMapping> {
        DocumentMapping::new(T::document_type())
    }

    pub fn for_document_in<T: Document>(schema_name: &str) -> Result<DocumentMapping> {
        DocumentMapping::with_schema(T::document_type(), schema_name)
    }

    pub fn document_type(&self) -> &DocumentType {
        &self.document_type
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Overrides the alias. The value is trimmed and lowercased, and every
    /// derived name follows on its next read.
    ///
    /// An empty alias is rejected and leaves the current one in place.
    pub fn set_alias(&mut self, alias: impl AsRef<str>) -> Result<()> {
        let alias = alias.as_ref().trim();

        if alias.is_empty() {
            crate::bail!(
                "empty alias for document type `{}`",
                self.document_type.name
            );
        }

        let alias = alias.to_ascii_lowercase();
        tracing::debug!(
            document_type = %self.document_type.name,
            from = %self.alias,
            to = %alias,
            "alias changed"
        );
        self.alias = alias;
        Ok(())
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn set_schema_name(&mut self, schema_name: impl AsRef<str>) {
        self.schema_name = schema_name.as_ref().to_ascii_lowercase();
    }

    /// The member used as primary key.
    pub fn id_member(&self) -> &Member {
        &self.document_type.members[self.id_member]
    }

    pub fn table_name(&self) -> String {
        name::table_name(&self.alias)
    }

    pub fn qualified_table_name(&self) -> String {
        name::qualified_name(&self.schema_name, &self.table_name())
    }

    pub fn upsert_name(&self) -> String {
        name::upsert_name(&self.alias)
    }

    pub fn qualified_upsert_name(&self) -> String {
        name::qualified_name(&self.schema_name, &self.upsert_name())
    }

    pub fn use_optimistic_concurrency(&self) -> bool {
        self.use_optimistic_concurrency
    }

    pub fn set_use_optimistic_concurrency(&mut self, enabled: bool) {
        self.use_optimistic_concurrency = enabled;
    }

    /// Returns `true` if rows of this mapping may hold more than one type and
    /// therefore need a discriminator column.
    ///
    /// Evaluated on every call: abstract types and interfaces are always
    /// hierarchies, concrete types only once a subclass is registered.
    pub fn is_hierarchy(&self) -> bool {
        if self.document_type.is_abstract() {
            return true;
        }

        if self.document_type.is_interface() {
            return true;
        }

        !self.sub_classes.is_empty()
    }

    pub fn sub_classes(&self) -> impl ExactSizeIterator<Item = &DocumentType> + '_ {
        self.sub_classes.values()
    }

    /// Registers a runtime variant of the mapped type.
    ///
    /// Registering the same type again is a no-op. Each variant's
    /// discriminator must be distinct from the root's and from every other
    /// variant's, so rows always read back as the type that wrote them.
    pub fn add_sub_class(&mut self, sub_class: DocumentType) -> Result<()> {
        if !sub_class.is_subtype_of(&self.document_type) {
            return Err(Error::invalid_subclass(
                &self.document_type.name,
                &sub_class.name,
            ));
        }

        if self.sub_classes.contains_key(&sub_class.name) {
            return Ok(());
        }

        let discriminator = name::alias(&sub_class.name);

        if discriminator.eq_ignore_ascii_case(columns::BASE_DISCRIMINATOR) {
            crate::bail!(
                "subclass `{}` cannot use discriminator `{discriminator}`, it is reserved for the root type",
                sub_class.name
            );
        }

        if let Some(existing) = self
            .sub_classes
            .values()
            .find(|existing| name::alias(&existing.name) == discriminator)
        {
            crate::bail!(
                "subclasses `{}` and `{}` share the discriminator `{discriminator}`",
                existing.name,
                sub_class.name
            );
        }

        tracing::debug!(
            document_type = %self.document_type.name,
            sub_class = %sub_class.name,
            discriminator = %discriminator,
            "registered subclass"
        );

        self.sub_classes.insert(sub_class.name.clone(), sub_class);
        Ok(())
    }

    pub fn add_sub_class_of<T: Document>(&mut self) -> Result<()> {
        self.add_sub_class(T::document_type())
    }

    pub fn add_sub_classes(
        &mut self,
        sub_classes: impl IntoIterator<Item = DocumentType>,
    ) -> Result<()> {
        for sub_class in sub_classes {
            self.add_sub_class(sub_class)?;
        }
        Ok(())
    }

    /// Discriminator value stored in the document type column for rows of
    /// `type_name`: [`columns::BASE_DISCRIMINATOR`] for the mapped type itself,
    /// the subclass alias for a registered subclass.
    pub fn alias_for(&self, type_name: &str) -> Option<String> {
        if type_name == self.document_type.name {
            return Some(columns::BASE_DISCRIMINATOR.to_string());
        }

        self.sub_classes
            .get(type_name)
            .map(|sub_class| name::alias(&sub_class.name))
    }

    /// Reverse of [`alias_for`](Self::alias_for), used when reading rows back.
    pub fn type_for_alias(&self, alias: &str) -> Option<&DocumentType> {
        if alias == columns::BASE_DISCRIMINATOR {
            return Some(&self.document_type);
        }

        self.sub_classes
            .values()
            .find(|sub_class| name::alias(&sub_class.name) == alias)
    }

    /// Resolves a member path to its SQL projection.
    ///
    /// Duplicated members resolve to their own column, the primary key member
    /// to `d.id`, and everything else to a JSON extraction from `d.data`.
    pub fn field_for(&self, path: &str) -> Result<Field> {
        let field = self.resolver().resolve(path)?;

        match self.duplicated_fields.get(&field.path()) {
            Some(duplicated) => Ok(duplicated.clone()),
            None => Ok(field),
        }
    }

    /// Promotes a member out of the payload into its own column.
    ///
    /// The column is named `column_name` (lowercased) when given, otherwise
    /// after the member in `snake_case`. Fields keep their registration order.
    pub fn duplicate_field(&mut self, path: &str, column_name: Option<&str>) -> Result<&Field> {
        let field = self.resolver().resolve(path)?;

        if field.is_identity() {
            return Err(Error::duplicate_column_name(columns::ID));
        }

        let column = match column_name {
            Some(column) if column.trim().is_empty() => {
                crate::bail!("empty column name for duplicated field `{path}`")
            }
            Some(column) => column.trim().to_ascii_lowercase(),
            None => field.column_name.clone(),
        };

        if let Some(existing) = self.duplicated_fields.get(&field.path()) {
            crate::bail!(
                "member `{}` is already duplicated as column `{}`",
                existing.path(),
                existing.column_name
            );
        }

        let taken = self
            .duplicated_fields
            .values()
            .any(|existing| existing.column_name == column);

        if taken || columns::is_reserved(&column) {
            return Err(Error::duplicate_column_name(column));
        }

        let field = field.into_duplicated(column);

        tracing::debug!(
            document_type = %self.document_type.name,
            member = %field.path(),
            column = %field.column_name,
            "duplicated field"
        );

        let (index, _) = self.duplicated_fields.insert_full(field.path(), field);
        Ok(&self.duplicated_fields[index])
    }

    pub fn duplicated_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.duplicated_fields.values()
    }

    /// Columns selected to read documents back, in projection order.
    pub fn select_fields(&self) -> Vec<&'static str> {
        if self.is_hierarchy() {
            vec![columns::DATA, columns::ID, columns::DOC_TYPE]
        } else {
            vec![columns::DATA, columns::ID]
        }
    }

    pub fn schema_objects(&self) -> SchemaObjects<'_> {
        SchemaObjects::new(self)
    }

    /// Shorthand for `schema_objects().storage_table()`.
    pub fn table(&self) -> Table {
        self.schema_objects().storage_table()
    }

    /// Shorthand for `schema_objects().upsert_function()`.
    pub fn upsert_function(&self) -> UpsertFunction {
        self.schema_objects().upsert_function()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver {
            ty: &self.document_type,
            members: &self.members,
            id_member: self.id_member,
        }
    }
}

/// Finds the primary key member, in order of precedence:
///
/// 1. the first member marked [`Marker::Identity`];
/// 2. the first member named `id`, ignoring ASCII case;
/// 3. the first member whose name ends in `Id` (e.g. `UserId`).
fn identity_member(ty: &DocumentType) -> Result<usize> {
    let members = &ty.members;

    members
        .iter()
        .position(|member| member.has_marker(Marker::Identity))
        .or_else(|| {
            members
                .iter()
                .position(|member| member.name.eq_ignore_ascii_case(columns::ID))
        })
        .or_else(|| {
            members
                .iter()
                .position(|member| member.name.ends_with("Id"))
        })
        .ok_or_else(|| Error::missing_identity(&ty.name))
}
