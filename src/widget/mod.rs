mod meta;

pub use meta::{COLUMNS_KEY, LAYOUT_KEY, Layout, Metadata, NAME_KEY, UnknownLayout};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A node of the designed widget tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Node {
    Container(Container),
    Widget(Widget),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Container(c) => c.id,
            Node::Widget(w) => w.id,
        }
    }

    /// Direct children, whether they belong to a container or a composite widget.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(c) => &c.objects,
            Node::Widget(w) => &w.children,
        }
    }

    /// Depth-first search for the node carrying `id`.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Largest id anywhere in this subtree.
    pub fn max_id(&self) -> NodeId {
        self.children()
            .iter()
            .map(Node::max_id)
            .fold(self.id(), NodeId::max)
    }
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::Container(c)
    }
}

impl From<Widget> for Node {
    fn from(w: Widget) -> Self {
        Node::Widget(w)
    }
}

/// A plain container: ordered objects arranged by the layout named in metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: NodeId,
    #[serde(default)]
    pub objects: Vec<Node>,
}

impl Container {
    pub fn new(id: NodeId, objects: Vec<Node>) -> Self {
        Self { id, objects }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: NodeId,
    /// Go type of the widget, e.g. `*widget.Label`.
    pub class: String,
    #[serde(default)]
    pub props: WidgetProps,
    /// Content of composite widgets (cards, scrolls, splits, tabs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Widget {
    pub fn new(id: NodeId, class: impl Into<String>, props: WidgetProps) -> Self {
        Self {
            id,
            class: class.into(),
            props,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl Alignment {
    pub const fn go_name(&self) -> &'static str {
        match self {
            Alignment::Leading => "fyne.TextAlignLeading",
            Alignment::Center => "fyne.TextAlignCenter",
            Alignment::Trailing => "fyne.TextAlignTrailing",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    #[default]
    Medium,
    Low,
    High,
    Danger,
    Warning,
    Success,
}

impl Importance {
    pub const fn go_name(&self) -> &'static str {
        match self {
            Importance::Medium => "widget.MediumImportance",
            Importance::Low => "widget.LowImportance",
            Importance::High => "widget.HighImportance",
            Importance::Danger => "widget.DangerImportance",
            Importance::Warning => "widget.WarningImportance",
            Importance::Success => "widget.SuccessImportance",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetProps {
    pub text: String,        // label/button/check text, entry content
    pub placeholder: String, // entry/select placeholder
    // card
    pub title: String,
    pub subtitle: String,
    // hyperlinks
    pub url: String,
    // theme icon name, e.g. "home" -> theme.HomeIcon()
    pub icon: String,
    pub checked: bool,
    pub multiline: bool,
    pub password: bool,
    // radio layout, split/scroll direction
    pub horizontal: bool,
    // slider/progress
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    // options for radio/select, tab titles for app tabs
    pub items: Vec<String>,
    pub selected: String,
    pub alignment: Alignment,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    pub importance: Importance,
}

impl Default for WidgetProps {
    fn default() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            title: String::new(),
            subtitle: String::new(),
            url: String::new(),
            icon: String::new(),
            checked: false,
            multiline: false,
            password: false,
            horizontal: false,
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: 0.0,
            items: vec![],
            selected: String::new(),
            alignment: Alignment::Leading,
            bold: false,
            italic: false,
            monospace: false,
            importance: Importance::Medium,
        }
    }
}

impl WidgetProps {
    pub fn has_text_style(&self) -> bool {
        self.bold || self.italic || self.monospace
    }
}

/// Escape `s` for use inside a Go interpreted string literal.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// `"a", "b"` for a Go `[]string{...}` literal.
pub fn string_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("\"{}\"", escape(s)))
        .collect::<Vec<_>>()
        .join(", ")
}
