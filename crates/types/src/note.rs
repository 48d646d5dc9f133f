use crate::ids::{PropertyId, PropertyNamespace};
use crate::property::PropertyValue;
use std::collections::BTreeMap;

/// A note in the vault: its vault-relative path and its frontmatter properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteEntry {
    pub path: String,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl NoteEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), properties: BTreeMap::new() }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// File name including its extension.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its extension.
    pub fn basename(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(dot) if dot > 0 => &name[..dot],
            _ => name,
        }
    }

    pub fn extension(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(dot) if dot > 0 => &name[dot + 1..],
            _ => "",
        }
    }

    /// Folder containing the note, `""` at the vault root.
    pub fn folder(&self) -> &str {
        self.path.rfind('/').map_or("", |slash| &self.path[..slash])
    }

    /// Looks up a property by id. Unknown ids yield [`PropertyValue::Null`].
    pub fn value(&self, id: &PropertyId) -> PropertyValue {
        match id.namespace() {
            PropertyNamespace::Note => self.properties.get(id.name()).cloned().unwrap_or_default(),
            PropertyNamespace::File => match id.name() {
                "name" => self.file_name().into(),
                "basename" => self.basename().into(),
                "path" => self.path.as_str().into(),
                "folder" => self.folder().into(),
                "ext" => self.extension().into(),
                _ => PropertyValue::Null,
            },
        }
    }
}
