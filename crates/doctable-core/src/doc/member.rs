use super::{Marker, Type};

/// A member declared by a document type (or by an embedded object).
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Declared name, as written on the host type
    pub name: String,

    /// Declared type
    pub ty: Type,

    /// Markers attached to the member
    pub markers: Vec<Marker>,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: Type) -> Member {
        Member {
            name: name.into(),
            ty,
            markers: vec![],
        }
    }

    /// A member holding a nested object with the given members.
    pub fn embedded(name: impl Into<String>, members: impl IntoIterator<Item = Member>) -> Member {
        Member::new(name, Type::Embedded(members.into_iter().collect()))
    }

    pub fn with_marker(mut self, marker: Marker) -> Member {
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Declared members of an embedded object, if this member holds one.
    pub fn members(&self) -> Option<&[Member]> {
        match &self.ty {
            Type::Embedded(members) => Some(members),
            _ => None,
        }
    }
}
