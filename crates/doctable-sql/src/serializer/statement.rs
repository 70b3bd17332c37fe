use super::{Comma, Ident, ToSql};

use crate::stmt;

/// Expression stamped into the touch column on every write
const TIMESTAMP: &str = "transaction_timestamp()";

/// Local variable holding the version an upsert just wrote
const RESULT_VAR: &str = "final_version";

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let indent = f.serializer.indent;

        for (index, column) in self.0.columns.iter().enumerate() {
            fmt!(f, "\n" indent column);
            if index < self.0.columns.len() - 1 || !self.0.primary_key.is_empty() {
                fmt!(f, ",");
            }
        }

        if !self.0.primary_key.is_empty() {
            let pk = Comma(self.0.primary_key.iter().map(Ident));
            fmt!(f, "\n" indent "PRIMARY KEY (" pk ")");
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let cascade = if self.cascade { " CASCADE" } else { "" };
        let name = &self.name;

        fmt!(f, "DROP TABLE " if_exists name cascade);
    }
}

impl ToSql for &stmt::CreateFunction {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let indent = f.serializer.indent;
        let name = &self.name;
        let table = &self.table;

        let params = Comma(
            self.arguments
                .iter()
                .map(|arg| (Ident(&arg.name), " ", arg.ty)),
        );
        let columns = Comma(self.arguments.iter().map(|arg| Ident(&arg.column)));
        let values = Comma(self.arguments.iter().map(|arg| Ident(&arg.name)));
        let assignments = Comma(
            self.arguments
                .iter()
                .filter(|arg| arg.column != self.key)
                .map(|arg| (Ident(&arg.column), " = ", Ident(&arg.name))),
        );
        let touch = Ident(&self.touch);

        fmt!(
            f,
            "CREATE OR REPLACE FUNCTION " name "(" params ")"
            " RETURNS " self.returns_ty " LANGUAGE plpgsql AS $function$\n"
            "DECLARE\n"
            indent RESULT_VAR " " self.returns_ty ";\n"
            "BEGIN\n"
            indent "INSERT INTO " table " (" columns ", " Ident(&self.touch) ")"
            " VALUES (" values ", " TIMESTAMP ")\n"
            indent indent "ON CONFLICT (" Ident(&self.key) ") DO UPDATE SET "
            assignments ", " touch " = " TIMESTAMP "\n"
            indent indent "RETURNING " Ident(&self.returning) " INTO " RESULT_VAR ";\n"
            indent "RETURN " RESULT_VAR ";\n"
            "END;\n"
            "$function$"
        );
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let from = &self.from;

        fmt!(f, "SELECT " columns " FROM " from " as " Ident(&self.alias));
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::CreateFunction(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}
