//! Design files: a widget tree plus its metadata, stored as JSON.

use crate::error::DesignError;
use crate::widget::{Container, Metadata, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub root: Node,
    #[serde(default)]
    pub meta: Metadata,
}

impl Default for Design {
    fn default() -> Self {
        Self {
            root: Node::Container(Container::new(NodeId::new(1), Vec::new())),
            meta: Metadata::default(),
        }
    }
}

impl Design {
    pub fn new(root: Node, meta: Metadata) -> Self {
        Self { root, meta }
    }

    pub fn from_json(json: &str) -> Result<Self, DesignError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DesignError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a design from file
    pub fn load(path: &Path) -> Result<Self, DesignError> {
        let json = fs::read_to_string(path)?;
        let design = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded {} (max node id {})",
            path.display(),
            design.max_id()
        );
        Ok(design)
    }

    /// Save design to file
    pub fn save(&self, path: &Path) -> Result<(), DesignError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Highest node id in use, so new nodes can continue the numbering.
    pub fn max_id(&self) -> NodeId {
        self.root.max_id()
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.root.find(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::WidgetKind;
    use crate::widget::NAME_KEY;

    fn sample() -> Design {
        let root = Container::new(
            NodeId::new(1),
            vec![
                WidgetKind::Label.spawn(NodeId::new(2)).into(),
                WidgetKind::Button.spawn(NodeId::new(7)).into(),
            ],
        );
        Design::new(
            root.into(),
            Metadata::new().with(NodeId::new(7), NAME_KEY, "submit"),
        )
    }

    #[test]
    fn test_default_design_is_empty_box() {
        let design = Design::default();
        assert!(design.root.children().is_empty());
        assert!(design.meta.is_empty());
        assert_eq!(design.max_id(), NodeId::new(1));
    }

    #[test]
    fn test_json_round_trip() {
        let design = sample();
        let json = design.to_json().unwrap();
        assert_eq!(Design::from_json(&json).unwrap(), design);
    }

    #[test]
    fn test_meta_is_optional() {
        let json = r#"{"root":{"t":"Widget","c":{"id":3,"class":"*widget.Separator"}}}"#;
        let design = Design::from_json(json).unwrap();
        assert!(design.meta.is_empty());
        assert_eq!(design.max_id(), NodeId::new(3));
    }

    #[test]
    fn test_invalid_json() {
        let err = Design::from_json("{\"root\": 5}").unwrap_err();
        assert!(matches!(err, DesignError::Json(_)));
    }

    #[test]
    fn test_find() {
        let design = sample();
        assert_eq!(design.max_id(), NodeId::new(7));
        match design.find(NodeId::new(7)) {
            Some(Node::Widget(w)) => assert_eq!(w.class, "*widget.Button"),
            other => panic!("unexpected node: {other:?}"),
        }
    }
}
