use crate::attribute::{DefaultEncoder, KeyValue, Set};

/// The entity producing telemetry, identified by its attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    attrs: Set,
    schema_url: String,
}

impl Resource {
    pub fn new<I: IntoIterator<Item = KeyValue>>(attrs: I) -> Self {
        Self {
            attrs: Set::new(attrs),
            schema_url: String::new(),
        }
    }

    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = schema_url.into();
        self
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &Set {
        &self.attrs
    }

    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }

    /// Value equality over attributes and schema URL
    pub fn equal(&self, other: &Resource) -> bool {
        self == other
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attrs.encoded(&DefaultEncoder))?;
        if !self.schema_url.is_empty() {
            write!(f, " ({})", self.schema_url)?;
        }
        Ok(())
    }
}
