use std::fmt;

/// A possibly schema-qualified SQL name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    pub fn qualified(schema: &str, name: &str) -> Name {
        Name(vec![schema.to_string(), name.to_string()])
    }
}

/// Splits on `.`, so `"public.mt_doc_user"` becomes a two-part name.
impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(value.split('.').map(str::to_string).collect())
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
