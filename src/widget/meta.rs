use super::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const NAME_KEY: &str = "name";
pub const LAYOUT_KEY: &str = "layout";
pub const COLUMNS_KEY: &str = "columns";

const DEFAULT_GRID_COLUMNS: usize = 2;

/// Per-node string annotations kept beside the tree by the editor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<NodeId, BTreeMap<String, String>>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId, key: &str) -> Option<&str> {
        self.0.get(&id)?.get(key).map(String::as_str)
    }

    /// Returns the previous value for `key`, if any.
    pub fn set(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.entry(id).or_default().insert(key.into(), value.into())
    }

    pub fn remove(&mut self, id: NodeId, key: &str) -> Option<String> {
        let props = self.0.get_mut(&id)?;
        let old = props.remove(key);
        if props.is_empty() {
            self.0.remove(&id);
        }
        old
    }

    pub fn with(mut self, id: NodeId, key: &str, value: &str) -> Self {
        self.set(id, key, value);
        self
    }

    /// Assigned variable name; empty names count as unnamed.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id, NAME_KEY).filter(|n| !n.is_empty())
    }

    pub fn layout(&self, id: NodeId) -> Layout {
        match self.get(id, LAYOUT_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown layout {:?} on node {}, using VBox", raw, id);
                Layout::VBox
            }),
            None => Layout::VBox,
        }
    }

    pub fn columns(&self, id: NodeId) -> usize {
        self.get(id, COLUMNS_KEY)
            .and_then(|c| c.trim().parse::<usize>().ok())
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_GRID_COLUMNS)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Arrangement of a plain container's objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    VBox,
    HBox,
    Center,
    Stack,
    Padded,
    Grid,
    Form,
}

impl Layout {
    pub const ALL: [Layout; 7] = [
        Layout::VBox,
        Layout::HBox,
        Layout::Center,
        Layout::Stack,
        Layout::Padded,
        Layout::Grid,
        Layout::Form,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Layout::VBox => "VBox",
            Layout::HBox => "HBox",
            Layout::Center => "Center",
            Layout::Stack => "Stack",
            Layout::Padded => "Padded",
            Layout::Grid => "Grid",
            Layout::Form => "Form",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VBox" => Ok(Layout::VBox),
            "HBox" => Ok(Layout::HBox),
            "Center" => Ok(Layout::Center),
            // older designs call the stack layout "Max"
            "Stack" | "Max" => Ok(Layout::Stack),
            "Padded" => Ok(Layout::Padded),
            "Grid" => Ok(Layout::Grid),
            "Form" => Ok(Layout::Form),
            other => Err(UnknownLayout(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_ignores_empty() {
        let id = NodeId::new(1);
        let mut meta = Metadata::new();
        assert_eq!(meta.name(id), None);

        meta.set(id, NAME_KEY, "");
        assert_eq!(meta.name(id), None);

        meta.set(id, NAME_KEY, "title");
        assert_eq!(meta.name(id), Some("title"));
    }

    #[test]
    fn test_layout_parsing() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>(), Ok(layout));
        }
        assert_eq!("Max".parse::<Layout>(), Ok(Layout::Stack));
        assert_eq!(
            "Diagonal".parse::<Layout>(),
            Err(UnknownLayout("Diagonal".into()))
        );
    }

    #[test]
    fn test_layout_defaults_to_vbox() {
        let id = NodeId::new(7);
        let meta = Metadata::new().with(id, LAYOUT_KEY, "Spiral");
        assert_eq!(meta.layout(id), Layout::VBox);
        assert_eq!(Metadata::new().layout(id), Layout::VBox);
    }

    #[test]
    fn test_columns() {
        let id = NodeId::new(3);
        assert_eq!(Metadata::new().columns(id), 2);
        assert_eq!(Metadata::new().with(id, COLUMNS_KEY, "4").columns(id), 4);
        assert_eq!(Metadata::new().with(id, COLUMNS_KEY, "0").columns(id), 2);
        assert_eq!(Metadata::new().with(id, COLUMNS_KEY, "x").columns(id), 2);
    }

    #[test]
    fn test_remove_drops_empty_entries() {
        let id = NodeId::new(2);
        let mut meta = Metadata::new().with(id, NAME_KEY, "entry");
        assert_eq!(meta.remove(id, NAME_KEY), Some("entry".into()));
        assert!(meta.is_empty());
        assert_eq!(meta.remove(id, NAME_KEY), None);
    }

    #[test]
    fn test_json_uses_string_keys() {
        let meta = Metadata::new().with(NodeId::new(12), NAME_KEY, "ok");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"12":{"name":"ok"}}"#);
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
    }
}
