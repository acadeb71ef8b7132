//! Go source export of a widget tree.
//!
//! Three passes over the same tree: the packages to import, the fields the
//! `gui` struct declares for named nodes, and the construction code itself.

use crate::config::ExportConfig;
use crate::error::{ExportError, FormatError};
use crate::format::GoFormatter;
use crate::registry::{self, Definitions};
use crate::widget::{LAYOUT_KEY, Layout, Metadata, Node};
use indexmap::IndexMap;
use std::io::Write;

/// Type of a named plain container in the generated struct.
pub const CONTAINER_TYPE: &str = "*fyne.Container";

/// Entry point appended by the preview variant.
pub const PREVIEW_MAIN: &str = r#"
func main() {
	myApp := app.New()
	myWindow := myApp.NewWindow("Hello")
	gui := newGUI()
	myWindow.SetContent(gui.makeUI())
	myWindow.ShowAndRun()
}
"#;

const TOOLKIT_ROOT: &str = "fyne.io/fyne/v2";

/// Write the generated code for `root` with the default exporter.
pub fn export_go<W: Write>(root: &Node, meta: &Metadata, w: &mut W) -> Result<(), ExportError> {
    Exporter::default().export(root, meta, w)
}

/// Like [`export_go`] but produces a runnable program with a `main` function.
pub fn export_go_preview<W: Write>(
    root: &Node,
    meta: &Metadata,
    w: &mut W,
) -> Result<(), ExportError> {
    Exporter::default().export_preview(root, meta, w)
}

#[derive(Clone, Debug, Default)]
pub struct Exporter {
    formatter: GoFormatter,
}

impl Exporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self::with_formatter(GoFormatter::new(&config.format))
    }

    pub fn with_formatter(formatter: GoFormatter) -> Self {
        Self { formatter }
    }

    pub fn export<W: Write>(
        &self,
        root: &Node,
        meta: &Metadata,
        w: &mut W,
    ) -> Result<(), ExportError> {
        w.write_all(self.generate(root, meta).as_bytes())?;
        Ok(())
    }

    pub fn export_preview<W: Write>(
        &self,
        root: &Node,
        meta: &Metadata,
        w: &mut W,
    ) -> Result<(), ExportError> {
        w.write_all(self.generate_preview(root, meta).as_bytes())?;
        Ok(())
    }

    pub fn generate(&self, root: &Node, meta: &Metadata) -> String {
        let packages = packages_required(root, meta);
        let vars = vars_required(root, meta);
        self.export_code(&packages, &vars, root, meta)
    }

    pub fn generate_preview(&self, root: &Node, meta: &Metadata) -> String {
        let mut packages = packages_required(root, meta);
        packages.push("app".to_string());
        let vars = vars_required(root, meta);

        let mut code = self.export_code(&packages, &vars, root, meta);
        code.push_str(PREVIEW_MAIN);
        code
    }

    /// Assemble the compilation unit and run it through the formatter.
    ///
    /// A formatter failure is logged and the unformatted text is returned.
    pub fn export_code(
        &self,
        packages: &[String],
        vars: &[String],
        root: &Node,
        meta: &Metadata,
    ) -> String {
        let imports = packages
            .iter()
            .map(|p| {
                if p == "net/url" {
                    format!("\t\"{p}\"")
                } else {
                    format!("\t\"{TOOLKIT_ROOT}/{p}\"")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        let fields = vars
            .iter()
            .map(|v| format!("\t{v}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut defs = Definitions::new();
        let main = registry::render(root, meta, &mut defs);
        let setup: String = defs
            .iter()
            .map(|(name, code)| format!("\tg.{name} = {code}\n"))
            .collect();

        let code = format!(
            "// auto-generated
// Code generated by GUI builder.

package main

import (
\t\"{TOOLKIT_ROOT}\"
{imports}
)

type gui struct {{
{fields}
}}

func newGUI() *gui {{
\treturn &gui{{}}
}}

func (g *gui) makeUI() fyne.CanvasObject {{
{setup}
\treturn {main}
}}
"
        );

        match self.formatter.format(&code) {
            Ok(formatted) => formatted,
            Err(FormatError::Disabled) => code,
            Err(e) => {
                tracing::error!("Failed to format GUI code: {}", e);
                code
            }
        }
    }
}

/// Packages the generated code imports, in first-seen depth-first order.
///
/// Names are relative to the toolkit root except `net/url`.
pub fn packages_required(node: &Node, meta: &Metadata) -> Vec<String> {
    let mut ret = vec!["container".to_string()];
    let objects = match node {
        Node::Container(c) => {
            let layout = meta.get(c.id, LAYOUT_KEY).and_then(|l| l.parse().ok());
            if layout == Some(Layout::Form) {
                tracing::debug!("Container {} uses the form layout", c.id);
                ret.push("layout".to_string());
            }
            c.objects.as_slice()
        }
        Node::Widget(w) if registry::is_container(w) => {
            tracing::debug!(
                "Composite {} {} has {} children",
                w.class,
                w.id,
                registry::children_of(w).len()
            );
            push_unique(&mut ret, registry::packages_for(w).into_iter().map(String::from));
            registry::children_of(w)
        }
        Node::Widget(w) => {
            return registry::packages_for(w)
                .into_iter()
                .map(String::from)
                .collect();
        }
    };

    for child in objects {
        push_unique(&mut ret, packages_required(child, meta));
    }
    ret
}

fn push_unique(list: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    for item in items {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

/// Field declarations (`name Type`) for every named node.
///
/// A name used twice is declared once, at its first position, with the type
/// of the last node carrying it; the setup code keeps the same node.
pub fn vars_required(node: &Node, meta: &Metadata) -> Vec<String> {
    let mut fields = IndexMap::new();
    collect_vars(node, meta, &mut fields);
    fields
        .into_iter()
        .map(|(name, ty)| format!("{name} {ty}"))
        .collect()
}

fn collect_vars<'a>(
    node: &'a Node,
    meta: &'a Metadata,
    fields: &mut IndexMap<&'a str, &'a str>,
) {
    match node {
        Node::Container(c) => {
            if let Some(name) = meta.name(c.id) {
                declare(fields, name, CONTAINER_TYPE);
            }
            for child in &c.objects {
                collect_vars(child, meta, fields);
            }
        }
        Node::Widget(w) => {
            for child in registry::children_of(w) {
                collect_vars(child, meta, fields);
            }
            if let Some(name) = meta.name(w.id) {
                declare(fields, name, &w.class);
            }
        }
    }
}

fn declare<'a>(fields: &mut IndexMap<&'a str, &'a str>, name: &'a str, ty: &'a str) {
    if fields.insert(name, ty).is_some() {
        tracing::warn!("Variable {} is declared more than once, keeping the last", name);
    }
}
