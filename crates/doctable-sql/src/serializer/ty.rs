use super::ToSql;

use doctable_core::schema::db;

impl ToSql for db::Type {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, self.as_sql());
    }
}
