/// Annotation attached to a document type or one of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// On a type: writes must carry the expected version of the stored row.
    UseOptimisticConcurrency,

    /// On a member: the member is the document's primary key, regardless of
    /// its name.
    Identity,
}
