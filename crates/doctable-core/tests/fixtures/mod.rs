#![allow(dead_code)]

use doctable_core::doc::{Document, DocumentType, Marker, Member, Type};

pub struct User;

impl Document for User {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::documents::User")
            .member("Id", Type::Uuid)
            .member("FirstName", Type::String)
            .member("LastName", Type::String)
            .member("Nickname", Type::String)
            .member("Age", Type::I32)
            .member("Internal", Type::Bool)
            .push_member(Member::embedded(
                "Address",
                [
                    Member::new("Street", Type::String),
                    Member::new("City", Type::String),
                    Member::new("PostalCode", Type::I32),
                ],
            ))
            .member("Tags", Type::List(Box::new(Type::String)))
            .build()
    }
}

pub struct SuperUser;

impl Document for SuperUser {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::documents::SuperUser")
            .extends(&User::document_type())
            .member("Role", Type::String)
            .build()
    }
}

pub struct AdminUser;

impl Document for AdminUser {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::documents::AdminUser")
            .extends(&User::document_type())
            .build()
    }
}

pub struct Squad;

impl Document for Squad {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::hierarchies::Squad")
            .member("Id", Type::String)
            .member("Name", Type::String)
            .build()
    }
}

pub struct BaseballTeam;

impl Document for BaseballTeam {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::hierarchies::BaseballTeam")
            .extends(&Squad::document_type())
            .member("Head", Type::String)
            .build()
    }
}

pub struct FootballTeam;

impl Document for FootballTeam {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::hierarchies::FootballTeam")
            .extends(&Squad::document_type())
            .member("Stadium", Type::String)
            .build()
    }
}

pub struct IntDoc;

impl Document for IntDoc {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::documents::IntDoc")
            .member("Id", Type::I32)
            .build()
    }
}

/// Lowercase `id` member
pub struct FieldId;

impl Document for FieldId {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::FieldId")
            .member("id", Type::String)
            .build()
    }
}

pub struct AbstractDoc;

impl Document for AbstractDoc {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::AbstractDoc")
            .abstract_type()
            .member("id", Type::I32)
            .build()
    }
}

pub struct IDoc;

impl Document for IDoc {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::IDoc")
            .interface()
            .member("id", Type::String)
            .build()
    }
}

pub struct VersionedDoc;

impl Document for VersionedDoc {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::VersionedDoc")
            .marker(Marker::UseOptimisticConcurrency)
            .member("Id", Type::Uuid)
            .build()
    }
}

/// Key found by the `...Id` suffix convention
pub struct Invoice;

impl Document for Invoice {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::Invoice")
            .member("Number", Type::String)
            .member("InvoiceId", Type::I64)
            .member("CustomerId", Type::I64)
            .build()
    }
}

/// Key chosen by marker, even though an `Id` member exists
pub struct Account;

impl Document for Account {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::Account")
            .member("Id", Type::String)
            .identity("Handle", Type::String)
            .build()
    }
}

pub struct Tag;

impl Document for Tag {
    fn document_type() -> DocumentType {
        DocumentType::builder("app::Tag")
            .member("Label", Type::String)
            .build()
    }
}
