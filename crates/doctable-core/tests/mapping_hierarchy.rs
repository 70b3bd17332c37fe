mod fixtures;
use fixtures::*;

use doctable_core::{
    doc::{Document, DocumentType},
    DocumentMapping,
};
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_none, assert_ok};

#[test]
fn is_hierarchy_is_false_for_concrete_type_with_no_subclasses() {
    let mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert!(!mapping.is_hierarchy());
}

#[test]
fn concrete_type_with_subclasses_is_hierarchy() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_ok!(mapping.add_sub_class_of::<SuperUser>());

    assert!(mapping.is_hierarchy());
}

#[test]
fn is_hierarchy_always_true_for_abstract_type() {
    let mapping = assert_ok!(DocumentMapping::for_document::<AbstractDoc>());
    assert!(mapping.is_hierarchy());
}

#[test]
fn is_hierarchy_always_true_for_interface() {
    let mapping = assert_ok!(DocumentMapping::for_document::<IDoc>());
    assert!(mapping.is_hierarchy());
}

#[test]
fn adding_the_same_subclass_twice_is_a_no_op() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());

    assert_eq!(mapping.sub_classes().len(), 1);
}

#[test]
fn subclasses_keep_registration_order() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_classes([
        FootballTeam::document_type(),
        BaseballTeam::document_type(),
    ]));

    let names: Vec<_> = mapping.sub_classes().map(|ty| ty.simple_name()).collect();
    assert_eq!(names, ["FootballTeam", "BaseballTeam"]);
}

#[test]
fn unrelated_subclass_is_rejected() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());

    let err = assert_err!(mapping.add_sub_class_of::<BaseballTeam>());
    assert!(err.is_invalid_subclass());
    assert_eq!(
        err.to_string(),
        "invalid subclass: `app::hierarchies::BaseballTeam` is not a subtype of `app::documents::User`"
    );
    assert!(!mapping.is_hierarchy());
}

#[test]
fn the_mapped_type_is_not_its_own_subclass() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<User>());

    let err = assert_err!(mapping.add_sub_class_of::<User>());
    assert!(err.is_invalid_subclass());
}

#[test]
fn a_base_type_is_not_a_subclass() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<SuperUser>());

    let err = assert_err!(mapping.add_sub_class_of::<User>());
    assert!(err.is_invalid_subclass());
}

#[test]
fn failed_registration_in_a_batch_keeps_earlier_subclasses() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());

    let err = assert_err!(mapping.add_sub_classes([
        BaseballTeam::document_type(),
        SuperUser::document_type(),
    ]));
    assert!(err.is_invalid_subclass());
    assert_eq!(mapping.sub_classes().len(), 1);
}

#[test]
fn subclasses_sharing_a_discriminator_are_rejected() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    let squad = Squad::document_type();

    assert_ok!(mapping.add_sub_class(
        DocumentType::builder("app::a::Team").extends(&squad).build()
    ));

    let err = assert_err!(mapping.add_sub_class(
        DocumentType::builder("app::b::Team").extends(&squad).build()
    ));
    assert_eq!(
        err.to_string(),
        "subclasses `app::a::Team` and `app::b::Team` share the discriminator `team`"
    );

    assert_eq!(mapping.sub_classes().len(), 1);
    assert_eq!(
        mapping.type_for_alias("team").map(|ty| ty.name.as_str()),
        Some("app::a::Team")
    );
}

#[test]
fn subclass_cannot_take_the_root_discriminator() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    let squad = Squad::document_type();

    let err = assert_err!(mapping.add_sub_class(
        DocumentType::builder("app::hierarchies::Base")
            .extends(&squad)
            .build()
    ));
    assert_eq!(
        err.to_string(),
        "subclass `app::hierarchies::Base` cannot use discriminator `base`, it is reserved for the root type"
    );
    assert!(!mapping.is_hierarchy());
}

#[test]
fn select_fields_without_subclasses() {
    let mapping = assert_ok!(DocumentMapping::for_document::<User>());
    assert_eq!(mapping.select_fields(), ["data", "id"]);
}

#[test]
fn select_fields_with_subclasses() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());

    assert_eq!(
        mapping.select_fields(),
        ["data", "id", DocumentMapping::DOCUMENT_TYPE_COLUMN]
    );
}

#[test]
fn select_fields_for_abstract_type() {
    let mapping = assert_ok!(DocumentMapping::for_document::<AbstractDoc>());
    assert_eq!(mapping.select_fields(), ["data", "id", "mt_doc_type"]);
}

#[test]
fn discriminator_values() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());

    assert_eq!(
        mapping.alias_for("app::hierarchies::Squad").as_deref(),
        Some("BASE")
    );
    assert_eq!(
        mapping.alias_for("app::hierarchies::BaseballTeam").as_deref(),
        Some("baseballteam")
    );
    assert_none!(mapping.alias_for("app::hierarchies::FootballTeam"));
}

#[test]
fn type_for_discriminator_value() {
    let mut mapping = assert_ok!(DocumentMapping::for_document::<Squad>());
    assert_ok!(mapping.add_sub_class_of::<BaseballTeam>());

    let base = mapping.type_for_alias("BASE").map(|ty| ty.simple_name());
    let team = mapping
        .type_for_alias("baseballteam")
        .map(|ty| ty.simple_name());

    assert_eq!(base, Some("Squad"));
    assert_eq!(team, Some("BaseballTeam"));
    assert_none!(mapping.type_for_alias("footballteam"));
}
