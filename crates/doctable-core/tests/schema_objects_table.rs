mod fixtures;
use fixtures::*;

use doctable_core::{schema::db, DocumentMapping};
use pretty_assertions::assert_eq;
use std_util::{assert_ok, assert_unique};

fn column_names(mapping: &DocumentMapping) -> Vec<String> {
    mapping
        .schema_objects()
        .storage_table()
        .column_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn to_table_without_subclasses_and_no_duplicated_fields() {
    let mapping = assert_ok!(DocumentMapping::for_document::<IntDoc>());

    assert_eq!(
        column_names(&mapping),
        [
            "id",
            "data",
            DocumentMapping::LAST_MODIFIED_COLUMN,
            DocumentMapping::VERSION_COLUMN,
            DocumentMapping::HOST_TYPE_COLUMN,
        ]
    );
}

#[test]
fn to_table_columns_with_duplicated_fields() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_ok!(mapping.duplicate_field("FirstName", None));

    assert_eq!(
        column_names(&mapping),
        [
            "id",
            "data",
            DocumentMapping::LAST_MODIFIED_COLUMN,
            DocumentMapping::VERSION_COLUMN,
            DocumentMapping::HOST_TYPE_COLUMN,
            "first_name",
        ]
    );
}

#[test]
fn to_table_columns_with_subclasses() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());

    let table = mapping.schema_objects().storage_table();
    assert_eq!(table.columns.len(), 6);

    let type_column = table.columns.last().unwrap();
    assert_eq!(type_column.name, DocumentMapping::DOCUMENT_TYPE_COLUMN);
    assert_eq!(type_column.ty, db::Type::VarChar);
    assert_eq!(type_column.ty.to_string(), "varchar");
    assert_eq!(type_column.default.as_deref(), Some("'BASE'"));
}

#[test]
fn discriminator_stays_last_after_duplicated_fields() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_ok!(mapping.duplicate_field("FirstName", None));
    assert_ok!(mapping.add_sub_class_of::<SuperUser>());

    let names = column_names(&mapping);
    assert_eq!(names[5], "first_name");
    assert_eq!(names.last().map(String::as_str), Some("mt_doc_type"));
}

#[test]
fn abstract_type_gets_a_discriminator_without_subclasses() {
    let mapping = assert_ok!(DocumentMapping::for_document::<AbstractDoc>());

    assert_eq!(
        column_names(&mapping),
        [
            "id",
            "data",
            "mt_last_modified",
            "mt_version",
            "mt_host_type",
            "mt_doc_type",
        ]
    );
}

#[test]
fn table_reflects_mutations_after_it_was_first_derived() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    let before = mapping.table();

    assert_ok!(mapping.duplicate_field("Name", None));
    assert_ok!(mapping.add_sub_class_of::<FootballTeam>());
    let after = mapping.table();

    assert_eq!(before.columns.len(), 5);
    assert_eq!(after.columns.len(), 7);
    assert_eq!(after.column("name").map(|c| c.position), Some(5));
}

#[test]
fn column_positions_and_uniqueness() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_ok!(mapping.duplicate_field("FirstName", None));
    assert_ok!(mapping.duplicate_field("LastName", None));
    assert_ok!(mapping.add_sub_class_of::<AdminUser>());

    let table = mapping.table();
    for (index, column) in table.columns.iter().enumerate() {
        assert_eq!(column.position, index);
    }

    let names = column_names(&mapping);
    assert_unique!(names);
}

#[test]
fn storage_types() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_ok!(mapping.duplicate_field("Age", None));
    assert_ok!(mapping.duplicate_field("Tags", None));

    let table = mapping.table();
    let types: Vec<_> = table
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.ty))
        .collect();

    assert_eq!(
        types,
        [
            ("id", db::Type::Uuid),
            ("data", db::Type::Jsonb),
            ("mt_last_modified", db::Type::TimestampTz),
            ("mt_version", db::Type::Uuid),
            ("mt_host_type", db::Type::VarChar),
            ("age", db::Type::Integer),
            ("tags", db::Type::Jsonb),
        ]
    );
}

#[test]
fn id_column_type_follows_the_id_member() {
    let int_doc = assert_ok!(DocumentMapping::for_document::<IntDoc>());
    let invoice = assert_ok!(DocumentMapping::for_document::<Invoice>());
    let squad = assert_ok!(DocumentMapping::for_document::<Squad>());

    assert_eq!(int_doc.table().columns[0].ty, db::Type::Integer);
    assert_eq!(invoice.table().columns[0].ty, db::Type::BigInt);
    assert_eq!(squad.table().columns[0].ty, db::Type::VarChar);
}

#[test]
fn primary_key_is_the_id_column() {
    let mapping = assert_ok!(DocumentMapping::for_document::<User>());
    let table = mapping.table();

    let keys: Vec<_> = table.primary_key_columns().map(|c| c.name.as_str()).collect();
    assert_eq!(keys, ["id"]);
    assert!(table.columns[0].primary_key);
    assert!(!table.columns[0].nullable);
    assert!(table.columns[1..].iter().all(|column| !column.primary_key));
}
