use super::{Marker, Member, Type};

use std_util::str;

/// Description of a host type stored as a document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentType {
    /// Fully qualified name of the type. Uniquely identifies the type.
    pub name: String,

    /// Concrete, abstract or interface
    pub kind: TypeKind,

    /// Declared members, in declaration order
    pub members: Vec<Member>,

    /// Fully qualified names of every type this type derives from or
    /// implements, transitively.
    pub supertypes: Vec<String>,

    /// Markers attached to the type
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Concrete,
    Abstract,
    Interface,
}

#[derive(Debug)]
pub struct Builder {
    ty: DocumentType,
}

impl DocumentType {
    /// Starts describing a concrete type.
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder {
            ty: DocumentType {
                name: name.into(),
                kind: TypeKind::Concrete,
                members: vec![],
                supertypes: vec![],
                markers: vec![],
            },
        }
    }

    /// The type name without its namespace.
    pub fn simple_name(&self) -> &str {
        str::simple_name(&self.name)
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Returns `true` if values of this type can be stored where `other` is
    /// expected, i.e. `other` is one of this type's supertypes.
    ///
    /// A type is not considered a subtype of itself.
    pub fn is_subtype_of(&self, other: &DocumentType) -> bool {
        self.name != other.name && self.supertypes.iter().any(|name| *name == other.name)
    }
}

impl Builder {
    pub fn kind(&mut self, kind: TypeKind) -> &mut Self {
        self.ty.kind = kind;
        self
    }

    pub fn abstract_type(&mut self) -> &mut Self {
        self.kind(TypeKind::Abstract)
    }

    pub fn interface(&mut self) -> &mut Self {
        self.kind(TypeKind::Interface)
    }

    pub fn member(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.push_member(Member::new(name, ty))
    }

    /// Declares a member carrying [`Marker::Identity`].
    pub fn identity(&mut self, name: impl Into<String>, ty: Type) -> &mut Self {
        self.push_member(Member::new(name, ty).with_marker(Marker::Identity))
    }

    pub fn push_member(&mut self, member: Member) -> &mut Self {
        self.ty.members.push(member);
        self
    }

    /// Records that the type derives from (or implements) `base`.
    ///
    /// The base's own supertypes are inherited, as are any of its members not
    /// already declared on this type.
    pub fn extends(&mut self, base: &DocumentType) -> &mut Self {
        self.add_supertype(&base.name);
        for name in &base.supertypes {
            self.add_supertype(name);
        }

        for member in &base.members {
            if !self.ty.members.iter().any(|m| m.name == member.name) {
                self.ty.members.push(member.clone());
            }
        }
        self
    }

    pub fn marker(&mut self, marker: Marker) -> &mut Self {
        if !self.ty.markers.contains(&marker) {
            self.ty.markers.push(marker);
        }
        self
    }

    pub fn build(&self) -> DocumentType {
        self.ty.clone()
    }

    fn add_supertype(&mut self, name: &str) {
        if !self.ty.supertypes.iter().any(|s| s == name) {
            self.ty.supertypes.push(name.to_string());
        }
    }
}
