use super::{columns, db, name};
use crate::{
    doc::{self, DocumentType, Member},
    Error, Result,
};

use std::collections::HashMap;

/// A member of a document type, projected onto SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared member names from the document root to the member.
    pub member_path: Vec<String>,

    /// Column storing the member when it lives in its own column, and the
    /// JSON key of the member otherwise.
    pub column_name: String,

    /// SQL expression reading the member from a row aliased `d`.
    pub sql_locator: String,

    /// Declared type of the member
    pub member_ty: doc::Type,

    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The primary key member, read from the `id` column
    Identity,

    /// A member read out of the JSON payload
    Json,

    /// A member promoted into its own column
    Duplicated,
}

impl Field {
    /// Member path joined with `.`, using declared member names.
    pub fn path(&self) -> String {
        self.member_path.join(".")
    }

    /// Database type of a column holding this member.
    pub fn storage_ty(&self) -> db::Type {
        db::Type::from_member(&self.member_ty)
    }

    pub fn is_identity(&self) -> bool {
        self.kind == FieldKind::Identity
    }

    pub fn is_duplicated(&self) -> bool {
        self.kind == FieldKind::Duplicated
    }

    /// Turns a payload field into a field backed by its own `column`.
    pub(crate) fn into_duplicated(self, column: String) -> Field {
        Field {
            sql_locator: column_locator(&column),
            column_name: column,
            kind: FieldKind::Duplicated,
            ..self
        }
    }
}

/// Lookup table over a type's top-level members, built once per mapping.
///
/// Exact names win over ASCII case-insensitive matches; among members that
/// only differ by case, the first declared one is used.
#[derive(Debug, Clone)]
pub(crate) struct MemberRegistry {
    exact: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl MemberRegistry {
    pub(crate) fn new(members: &[Member]) -> MemberRegistry {
        let mut exact = HashMap::with_capacity(members.len());
        let mut folded = HashMap::with_capacity(members.len());

        for (index, member) in members.iter().enumerate() {
            exact.entry(member.name.clone()).or_insert(index);
            folded
                .entry(member.name.to_ascii_lowercase())
                .or_insert(index);
        }

        MemberRegistry { exact, folded }
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.to_ascii_lowercase()))
            .copied()
    }
}

/// Resolves member paths against one document type.
pub(crate) struct Resolver<'a> {
    pub(crate) ty: &'a DocumentType,
    pub(crate) members: &'a MemberRegistry,
    pub(crate) id_member: usize,
}

impl Resolver<'_> {
    /// Resolves a dotted member path (`"FirstName"`, `"Address.City"`).
    pub(crate) fn resolve(&self, path: &str) -> Result<Field> {
        let unknown = || Error::unknown_member(&self.ty.name, path);

        let segments: Vec<&str> = path.split('.').map(str::trim).collect();
        let [first, rest @ ..] = &segments[..] else {
            return Err(unknown());
        };

        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(unknown());
        }

        let index = self.members.get(first).ok_or_else(unknown)?;
        let mut member = &self.ty.members[index];
        let mut member_path = vec![member.name.clone()];

        for segment in rest {
            let nested = member.members().ok_or_else(unknown)?;
            member = find_member(nested, segment).ok_or_else(unknown)?;
            member_path.push(member.name.clone());
        }

        if rest.is_empty() && index == self.id_member {
            return Ok(Field {
                member_path,
                column_name: columns::ID.to_string(),
                sql_locator: column_locator(columns::ID),
                member_ty: member.ty.clone(),
                kind: FieldKind::Identity,
            });
        }

        Ok(Field {
            column_name: name::column_name(&member.name),
            sql_locator: json_locator(&member_path, &member.ty),
            member_path,
            member_ty: member.ty.clone(),
            kind: FieldKind::Json,
        })
    }
}

fn find_member<'a>(members: &'a [Member], name: &str) -> Option<&'a Member> {
    members
        .iter()
        .find(|member| member.name == name)
        .or_else(|| {
            members
                .iter()
                .find(|member| member.name.eq_ignore_ascii_case(name))
        })
}

fn column_locator(column: &str) -> String {
    format!("{}.{column}", columns::TABLE_ALIAS)
}

/// Builds the expression extracting a member out of the payload column.
///
/// Scalars are extracted as text (`->>` / `#>>`) and cast to their storage
/// type unless they are strings. Objects and lists are extracted as `jsonb`
/// (`->` / `#>`).
fn json_locator(member_path: &[String], ty: &doc::Type) -> String {
    let keys: Vec<String> = member_path
        .iter()
        .map(|member| name::column_name(member))
        .collect();

    let json = ty.is_json();
    let payload = format!("{}.{}", columns::TABLE_ALIAS, columns::DATA);

    let locator = match &keys[..] {
        [key] if json => format!("{payload} -> '{key}'"),
        [key] => format!("{payload} ->> '{key}'"),
        keys if json => format!("{payload} #> '{{{}}}'", keys.join(",")),
        keys => format!("{payload} #>> '{{{}}}'", keys.join(",")),
    };

    if json || ty.is_text() {
        locator
    } else {
        format!("CAST({locator} as {})", db::Type::from_member(ty))
    }
}
