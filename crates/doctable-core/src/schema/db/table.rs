use super::{Column, Type};
use crate::schema::name;

/// Storage table of a document type.
///
/// Tables are derived from a [`DocumentMapping`](crate::DocumentMapping) on
/// demand and never mutated by users.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Lowercase schema the table lives in
    pub schema_name: String,

    /// Unqualified name of the table
    pub name: String,

    /// The table's columns, ordered by position
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimaryKey {
    /// Positions of the key columns
    pub columns: Vec<usize>,
}

impl Table {
    pub(crate) fn new(schema_name: &str, name: String) -> Table {
        Table {
            schema_name: schema_name.to_ascii_lowercase(),
            name,
            columns: vec![],
            primary_key: PrimaryKey::default(),
        }
    }

    /// `schema.name`
    pub fn qualified_name(&self) -> String {
        name::qualified_name(&self.schema_name, &self.name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key
            .columns
            .iter()
            .map(|position| &self.columns[*position])
    }

    /// Appends a column at the next position and returns that position.
    pub(crate) fn push_column(
        &mut self,
        name: impl Into<String>,
        ty: Type,
        nullable: bool,
        default: Option<&str>,
    ) -> usize {
        let position = self.columns.len();

        self.columns.push(Column {
            name: name.into(),
            ty,
            position,
            nullable,
            primary_key: false,
            default: default.map(str::to_string),
        });

        position
    }
}
