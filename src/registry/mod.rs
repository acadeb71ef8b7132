//! Widget-kind registry: what the exporter knows about each widget class.

mod gostring;

pub use gostring::{render, theme_icon};

use crate::widget::{Node, NodeId, Widget, WidgetProps};
use indexmap::IndexMap;

/// Fields of the generated `gui` struct that are assigned before the root is returned.
///
/// Insertion order is kept so a named child is assigned before the named
/// parent whose construction refers to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Definitions(IndexMap<String, String>);

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, code: String) {
        if self.0.insert(name.to_string(), code).is_some() {
            tracing::warn!("Variable {} is defined more than once, keeping the last", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    Button,
    Entry,
    Check,
    Hyperlink,
    Slider,
    ProgressBar,
    ProgressBarInfinite,
    RadioGroup,
    Select,
    Separator,
    Icon,
    Card,
    Scroll,
    Split,
    AppTabs,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 16] = [
        WidgetKind::Label,
        WidgetKind::Button,
        WidgetKind::Entry,
        WidgetKind::Check,
        WidgetKind::Hyperlink,
        WidgetKind::Slider,
        WidgetKind::ProgressBar,
        WidgetKind::ProgressBarInfinite,
        WidgetKind::RadioGroup,
        WidgetKind::Select,
        WidgetKind::Separator,
        WidgetKind::Icon,
        WidgetKind::Card,
        WidgetKind::Scroll,
        WidgetKind::Split,
        WidgetKind::AppTabs,
    ];

    /// Go type the kind is registered under.
    pub const fn class(&self) -> &'static str {
        match self {
            WidgetKind::Label => "*widget.Label",
            WidgetKind::Button => "*widget.Button",
            WidgetKind::Entry => "*widget.Entry",
            WidgetKind::Check => "*widget.Check",
            WidgetKind::Hyperlink => "*widget.Hyperlink",
            WidgetKind::Slider => "*widget.Slider",
            WidgetKind::ProgressBar => "*widget.ProgressBar",
            WidgetKind::ProgressBarInfinite => "*widget.ProgressBarInfinite",
            WidgetKind::RadioGroup => "*widget.RadioGroup",
            WidgetKind::Select => "*widget.Select",
            WidgetKind::Separator => "*widget.Separator",
            WidgetKind::Icon => "*widget.Icon",
            WidgetKind::Card => "*widget.Card",
            WidgetKind::Scroll => "*container.Scroll",
            WidgetKind::Split => "*container.Split",
            WidgetKind::AppTabs => "*container.AppTabs",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            WidgetKind::Label => "Label",
            WidgetKind::Button => "Button",
            WidgetKind::Entry => "Entry",
            WidgetKind::Check => "Check",
            WidgetKind::Hyperlink => "Hyperlink",
            WidgetKind::Slider => "Slider",
            WidgetKind::ProgressBar => "Progress Bar",
            WidgetKind::ProgressBarInfinite => "Infinite Progress",
            WidgetKind::RadioGroup => "Radio Group",
            WidgetKind::Select => "Select",
            WidgetKind::Separator => "Separator",
            WidgetKind::Icon => "Icon",
            WidgetKind::Card => "Card",
            WidgetKind::Scroll => "Scroll",
            WidgetKind::Split => "Split",
            WidgetKind::AppTabs => "App Tabs",
        }
    }

    /// Kinds that hold other nodes.
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            WidgetKind::Card | WidgetKind::Scroll | WidgetKind::Split | WidgetKind::AppTabs
        )
    }

    /// Child nodes of a composite widget; empty for leaves.
    pub fn children<'a>(&self, w: &'a Widget) -> &'a [Node] {
        if self.is_container() {
            &w.children
        } else {
            &[]
        }
    }

    /// Packages (relative to the toolkit root, except `net/url`) the widget's code needs.
    pub fn packages(&self, w: &Widget) -> Vec<&'static str> {
        match self {
            WidgetKind::Button | WidgetKind::Icon if !w.props.icon.is_empty() => {
                vec!["widget", "theme"]
            }
            WidgetKind::Hyperlink => vec!["widget", "net/url"],
            WidgetKind::Scroll | WidgetKind::Split | WidgetKind::AppTabs => vec!["container"],
            _ => vec!["widget"],
        }
    }

    /// Returns the default properties for a widget of this kind.
    pub fn default_props(&self) -> WidgetProps {
        match self {
            WidgetKind::Label => WidgetProps {
                text: "Label".into(),
                ..Default::default()
            },
            WidgetKind::Button => WidgetProps {
                text: "Button".into(),
                ..Default::default()
            },
            WidgetKind::Entry => WidgetProps {
                placeholder: "Type here".into(),
                ..Default::default()
            },
            WidgetKind::Check => WidgetProps {
                text: "Check".into(),
                ..Default::default()
            },
            WidgetKind::Hyperlink => WidgetProps {
                text: "Open website".into(),
                url: "https://fyne.io/".into(),
                ..Default::default()
            },
            WidgetKind::Slider => WidgetProps {
                min: 0.0,
                max: 100.0,
                step: 1.0,
                value: 42.0,
                ..Default::default()
            },
            WidgetKind::ProgressBar => WidgetProps {
                min: 0.0,
                max: 1.0,
                value: 0.25,
                ..Default::default()
            },
            WidgetKind::RadioGroup => WidgetProps {
                items: vec!["Option A".into(), "Option B".into(), "Option C".into()],
                selected: "Option A".into(),
                ..Default::default()
            },
            WidgetKind::Select => WidgetProps {
                items: vec!["Red".into(), "Green".into(), "Blue".into()],
                placeholder: "Choose one".into(),
                ..Default::default()
            },
            WidgetKind::Icon => WidgetProps {
                icon: "home".into(),
                ..Default::default()
            },
            WidgetKind::Card => WidgetProps {
                title: "Card".into(),
                subtitle: "Subtitle".into(),
                ..Default::default()
            },
            WidgetKind::Split => WidgetProps {
                horizontal: true,
                ..Default::default()
            },
            WidgetKind::AppTabs => WidgetProps {
                items: vec!["Tab 1".into(), "Tab 2".into()],
                ..Default::default()
            },
            WidgetKind::ProgressBarInfinite | WidgetKind::Separator | WidgetKind::Scroll => {
                WidgetProps::default()
            }
        }
    }

    /// A fresh widget of this kind with default properties.
    pub fn spawn(&self, id: NodeId) -> Widget {
        Widget::new(id, self.class(), self.default_props())
    }
}

/// Find the registered kind for a widget class such as `*widget.Label`.
pub fn lookup(class: &str) -> Option<WidgetKind> {
    WidgetKind::ALL.into_iter().find(|k| k.class() == class)
}

/// Packages for a widget, falling back to the generic widget package.
pub fn packages_for(w: &Widget) -> Vec<&'static str> {
    match lookup(&w.class) {
        Some(kind) => kind.packages(w),
        None => vec!["widget"],
    }
}

/// Children of a widget according to its registry entry.
pub fn children_of(w: &Widget) -> &[Node] {
    match lookup(&w.class) {
        Some(kind) => kind.children(w),
        None => &[],
    }
}

pub fn is_container(w: &Widget) -> bool {
    lookup(&w.class).is_some_and(|k| k.is_container())
}
