use crate::schema::{
    columns,
    db::{Type, UpsertArgument, UpsertFunction},
    DocumentMapping,
};

const ID_ARG: &str = "docId";
const DATA_ARG: &str = "doc";
const VERSION_ARG: &str = "docVersion";
const HOST_TYPE_ARG: &str = "docHostType";
const DOC_TYPE_ARG: &str = "docType";

pub(super) struct BuildUpsert<'a> {
    mapping: &'a DocumentMapping,

    /// Arguments in write-path order
    arguments: Vec<UpsertArgument>,
}

impl<'a> BuildUpsert<'a> {
    pub(super) fn new(mapping: &'a DocumentMapping) -> BuildUpsert<'a> {
        BuildUpsert {
            mapping,
            arguments: vec![],
        }
    }

    /// Argument order is the positional contract of the generated routine:
    /// key, payload, duplicated fields, version, host type, and the
    /// discriminator last for hierarchies.
    pub(super) fn build(mut self) -> UpsertFunction {
        let id_ty = Type::from_member(&self.mapping.id_member().ty);
        self.push(ID_ARG, columns::ID, id_ty);
        self.push(DATA_ARG, columns::DATA, Type::Jsonb);

        for field in self.mapping.duplicated_fields() {
            let arg = format!("arg_{}", field.column_name);
            self.push(&arg, &field.column_name, field.storage_ty());
        }

        self.push(VERSION_ARG, columns::VERSION, Type::Uuid);
        self.push(HOST_TYPE_ARG, columns::HOST_TYPE, Type::VarChar);

        if self.mapping.is_hierarchy() {
            self.push(DOC_TYPE_ARG, columns::DOC_TYPE, Type::VarChar);
        }

        let function = UpsertFunction {
            schema_name: self.mapping.schema_name().to_string(),
            name: self.mapping.upsert_name(),
            table: self.mapping.qualified_table_name(),
            arguments: self.arguments,
            use_optimistic_concurrency: self.mapping.use_optimistic_concurrency(),
        };

        tracing::trace!(
            function = %function.qualified_name(),
            arguments = function.arguments.len(),
            "derived upsert function"
        );

        function
    }

    fn push(&mut self, arg: &str, column: &str, ty: Type) {
        self.arguments.push(UpsertArgument {
            arg: arg.to_string(),
            column: column.to_string(),
            ty,
        });
    }
}
