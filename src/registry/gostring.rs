use super::{Definitions, WidgetKind, lookup};
use crate::widget::{
    Alignment, Container, Importance, Layout, Metadata, Node, Widget, escape, string_list,
};

/// Render `node` as a Go expression.
///
/// Named nodes are recorded in `defs` and referenced as `g.<name>`.
pub fn render(node: &Node, meta: &Metadata, defs: &mut Definitions) -> String {
    match node {
        Node::Container(c) => {
            let code = container_gostring(c, meta, defs);
            widget_ref(meta, node, defs, code)
        }
        Node::Widget(w) => {
            let code = match lookup(&w.class) {
                Some(kind) => kind.gostring(w, meta, defs),
                None => unregistered_gostring(w),
            };
            widget_ref(meta, node, defs, code)
        }
    }
}

fn widget_ref(meta: &Metadata, node: &Node, defs: &mut Definitions, code: String) -> String {
    match meta.name(node.id()) {
        Some(name) => {
            defs.insert(name, code);
            format!("g.{name}")
        }
        None => code,
    }
}

fn call(func: &str, args: &[String]) -> String {
    format!("{func}({})", args.join(", "))
}

fn render_all(nodes: &[Node], meta: &Metadata, defs: &mut Definitions) -> Vec<String> {
    nodes.iter().map(|n| render(n, meta, defs)).collect()
}

fn container_gostring(c: &Container, meta: &Metadata, defs: &mut Definitions) -> String {
    let objects = render_all(&c.objects, meta, defs);
    let layout = meta.layout(c.id);
    tracing::debug!("Container {} with {} objects as {}", c.id, objects.len(), layout);
    match layout {
        Layout::VBox => call("container.NewVBox", &objects),
        Layout::HBox => call("container.NewHBox", &objects),
        Layout::Center => call("container.NewCenter", &objects),
        Layout::Stack => call("container.NewStack", &objects),
        Layout::Padded => call("container.NewPadded", &objects),
        Layout::Grid => {
            let mut args = vec![meta.columns(c.id).to_string()];
            args.extend(objects);
            call("container.NewGridWithColumns", &args)
        }
        Layout::Form => {
            let mut args = vec!["layout.NewFormLayout()".to_string()];
            args.extend(objects);
            call("container.New", &args)
        }
    }
}

/// Zero value of an unknown class: `*pkg.Type` becomes `&pkg.Type{}`.
fn unregistered_gostring(w: &Widget) -> String {
    tracing::warn!("No registry entry for {}, emitting zero value", w.class);
    match w.class.strip_prefix('*') {
        Some(bare) => format!("&{bare}{{}}"),
        None => format!("{}{{}}", w.class),
    }
}

/// Content slot of a composite: one child as is, several stacked, none as an empty box.
fn content(children: &[Node], meta: &Metadata, defs: &mut Definitions) -> String {
    tracing::debug!("Composite content slot with {} children", children.len());
    match children {
        [] => "container.NewVBox()".to_string(),
        [only] => render(only, meta, defs),
        many => call("container.NewVBox", &render_all(many, meta, defs)),
    }
}

/// `theme.HomeIcon()` for `"home"`, `theme.DocumentSaveIcon()` for `"document-save"`.
pub fn theme_icon(name: &str) -> String {
    let mut ident: String = name
        .split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    if !ident.ends_with("Icon") {
        ident.push_str("Icon");
    }
    format!("theme.{ident}()")
}

/// `&url.URL{...}` literal for a link target.
fn url_literal(raw: &str) -> String {
    let mut fields = Vec::new();
    let (rest, fragment) = match raw.split_once('#') {
        Some((rest, frag)) => (rest, Some(frag)),
        None => (raw, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, q)) => (rest, Some(q)),
        None => (rest, None),
    };

    match rest.split_once("://") {
        Some((scheme, authority_path)) => {
            let (host, path) = match authority_path.find('/') {
                Some(i) => authority_path.split_at(i),
                None => (authority_path, ""),
            };
            fields.push(format!("Scheme: \"{}\"", escape(scheme)));
            fields.push(format!("Host: \"{}\"", escape(host)));
            if !path.is_empty() {
                fields.push(format!("Path: \"{}\"", escape(path)));
            }
        }
        None => match rest.split_once(':') {
            Some((scheme, opaque)) => {
                fields.push(format!("Scheme: \"{}\"", escape(scheme)));
                fields.push(format!("Opaque: \"{}\"", escape(opaque)));
            }
            None => fields.push(format!("Path: \"{}\"", escape(rest))),
        },
    }
    if let Some(q) = query {
        fields.push(format!("RawQuery: \"{}\"", escape(q)));
    }
    if let Some(f) = fragment {
        fields.push(format!("Fragment: \"{}\"", escape(f)));
    }
    format!("&url.URL{{{}}}", fields.join(", "))
}

fn text_style(w: &Widget) -> String {
    let mut fields = Vec::new();
    if w.props.bold {
        fields.push("Bold: true");
    }
    if w.props.italic {
        fields.push("Italic: true");
    }
    if w.props.monospace {
        fields.push("Monospace: true");
    }
    format!("fyne.TextStyle{{{}}}", fields.join(", "))
}

fn bounded_value(w: &Widget) -> f64 {
    let p = &w.props;
    if p.min <= p.max {
        p.value.clamp(p.min, p.max)
    } else {
        p.value
    }
}

fn struct_literal(class: &str, fields: &[String]) -> String {
    format!("&{}{{{}}}", class.trim_start_matches('*'), fields.join(", "))
}

impl WidgetKind {
    /// Go construction of `w`, children included.
    pub fn gostring(&self, w: &Widget, meta: &Metadata, defs: &mut Definitions) -> String {
        let p = &w.props;
        let text = escape(&p.text);
        match self {
            WidgetKind::Label => {
                if p.alignment == Alignment::Leading && !p.has_text_style() {
                    format!("widget.NewLabel(\"{text}\")")
                } else {
                    format!(
                        "widget.NewLabelWithStyle(\"{text}\", {}, {})",
                        p.alignment.go_name(),
                        text_style(w)
                    )
                }
            }
            WidgetKind::Button => {
                if p.importance != Importance::Medium {
                    let mut fields = vec![format!("Text: \"{text}\"")];
                    if !p.icon.is_empty() {
                        fields.push(format!("Icon: {}", theme_icon(&p.icon)));
                    }
                    fields.push(format!("Importance: {}", p.importance.go_name()));
                    fields.push("OnTapped: func() {}".to_string());
                    struct_literal(self.class(), &fields)
                } else if !p.icon.is_empty() {
                    format!(
                        "widget.NewButtonWithIcon(\"{text}\", {}, func() {{}})",
                        theme_icon(&p.icon)
                    )
                } else {
                    format!("widget.NewButton(\"{text}\", func() {{}})")
                }
            }
            WidgetKind::Entry => {
                let mut fields = Vec::new();
                if !p.text.is_empty() {
                    fields.push(format!("Text: \"{text}\""));
                }
                if !p.placeholder.is_empty() {
                    fields.push(format!("PlaceHolder: \"{}\"", escape(&p.placeholder)));
                }
                match (fields.is_empty(), p.multiline, p.password) {
                    (true, false, false) => "widget.NewEntry()".to_string(),
                    (true, true, false) => "widget.NewMultiLineEntry()".to_string(),
                    (true, false, true) => "widget.NewPasswordEntry()".to_string(),
                    _ => {
                        if p.multiline {
                            fields.push("MultiLine: true".to_string());
                            fields.push("Wrapping: fyne.TextWrapWord".to_string());
                        }
                        if p.password {
                            fields.push("Password: true".to_string());
                        }
                        struct_literal(self.class(), &fields)
                    }
                }
            }
            WidgetKind::Check => {
                if p.checked {
                    struct_literal(
                        self.class(),
                        &[
                            format!("Text: \"{text}\""),
                            "Checked: true".to_string(),
                            "OnChanged: func(bool) {}".to_string(),
                        ],
                    )
                } else {
                    format!("widget.NewCheck(\"{text}\", func(bool) {{}})")
                }
            }
            WidgetKind::Hyperlink => struct_literal(
                self.class(),
                &[
                    format!("Text: \"{text}\""),
                    format!("URL: {}", url_literal(&p.url)),
                ],
            ),
            WidgetKind::Slider => {
                let mut fields = vec![
                    format!("Min: {}", p.min),
                    format!("Max: {}", p.max),
                    format!("Value: {}", bounded_value(w)),
                ];
                if p.step > 0.0 {
                    fields.push(format!("Step: {}", p.step));
                }
                struct_literal(self.class(), &fields)
            }
            WidgetKind::ProgressBar => struct_literal(
                self.class(),
                &[
                    format!("Min: {}", p.min),
                    format!("Max: {}", p.max),
                    format!("Value: {}", bounded_value(w)),
                ],
            ),
            WidgetKind::ProgressBarInfinite => "widget.NewProgressBarInfinite()".to_string(),
            WidgetKind::RadioGroup => {
                let options = format!("[]string{{{}}}", string_list(&p.items));
                if p.selected.is_empty() && !p.horizontal {
                    format!("widget.NewRadioGroup({options}, func(string) {{}})")
                } else {
                    let mut fields = vec![format!("Options: {options}")];
                    if p.horizontal {
                        fields.push("Horizontal: true".to_string());
                    }
                    if !p.selected.is_empty() {
                        fields.push(format!("Selected: \"{}\"", escape(&p.selected)));
                    }
                    fields.push("OnChanged: func(string) {}".to_string());
                    struct_literal(self.class(), &fields)
                }
            }
            WidgetKind::Select => {
                let options = format!("[]string{{{}}}", string_list(&p.items));
                if p.selected.is_empty() && p.placeholder.is_empty() {
                    format!("widget.NewSelect({options}, func(string) {{}})")
                } else {
                    let mut fields = vec![format!("Options: {options}")];
                    if !p.placeholder.is_empty() {
                        fields.push(format!("PlaceHolder: \"{}\"", escape(&p.placeholder)));
                    }
                    if !p.selected.is_empty() {
                        fields.push(format!("Selected: \"{}\"", escape(&p.selected)));
                    }
                    fields.push("OnChanged: func(string) {}".to_string());
                    struct_literal(self.class(), &fields)
                }
            }
            WidgetKind::Separator => "widget.NewSeparator()".to_string(),
            WidgetKind::Icon => {
                if p.icon.is_empty() {
                    "widget.NewIcon(nil)".to_string()
                } else {
                    format!("widget.NewIcon({})", theme_icon(&p.icon))
                }
            }
            WidgetKind::Card => {
                let body = if w.children.is_empty() {
                    "nil".to_string()
                } else {
                    content(&w.children, meta, defs)
                };
                format!(
                    "widget.NewCard(\"{}\", \"{}\", {body})",
                    escape(&p.title),
                    escape(&p.subtitle)
                )
            }
            WidgetKind::Scroll => {
                let body = content(&w.children, meta, defs);
                if p.horizontal {
                    format!("container.NewHScroll({body})")
                } else {
                    format!("container.NewScroll({body})")
                }
            }
            WidgetKind::Split => {
                let (leading, trailing) = match w.children.split_first() {
                    Some((first, rest)) => (render(first, meta, defs), content(rest, meta, defs)),
                    None => (
                        "container.NewVBox()".to_string(),
                        "container.NewVBox()".to_string(),
                    ),
                };
                let func = if p.horizontal {
                    "container.NewHSplit"
                } else {
                    "container.NewVSplit"
                };
                call(func, &[leading, trailing])
            }
            WidgetKind::AppTabs => {
                let tabs: Vec<String> = w
                    .children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        let title = p
                            .items
                            .get(i)
                            .cloned()
                            .unwrap_or_else(|| format!("Tab {}", i + 1));
                        format!(
                            "container.NewTabItem(\"{}\", {})",
                            escape(&title),
                            render(child, meta, defs)
                        )
                    })
                    .collect();
                call("container.NewAppTabs", &tabs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{COLUMNS_KEY, LAYOUT_KEY, NAME_KEY, NodeId, WidgetProps};

    fn spawn(kind: WidgetKind, id: u64) -> Widget {
        kind.spawn(NodeId::new(id))
    }

    fn gostring(w: &Widget) -> String {
        render(&Node::Widget(w.clone()), &Metadata::new(), &mut Definitions::new())
    }

    #[test]
    fn test_label_variants() {
        let mut label = spawn(WidgetKind::Label, 1);
        label.props.text = "Say \"hi\"".into();
        assert_eq!(gostring(&label), "widget.NewLabel(\"Say \\\"hi\\\"\")");

        label.props.alignment = Alignment::Center;
        label.props.bold = true;
        assert_eq!(
            gostring(&label),
            "widget.NewLabelWithStyle(\"Say \\\"hi\\\"\", fyne.TextAlignCenter, fyne.TextStyle{Bold: true})"
        );
    }

    #[test]
    fn test_button_variants() {
        let mut button = spawn(WidgetKind::Button, 1);
        assert_eq!(gostring(&button), "widget.NewButton(\"Button\", func() {})");

        button.props.icon = "document-save".into();
        assert_eq!(
            gostring(&button),
            "widget.NewButtonWithIcon(\"Button\", theme.DocumentSaveIcon(), func() {})"
        );

        button.props.importance = Importance::High;
        assert_eq!(
            gostring(&button),
            "&widget.Button{Text: \"Button\", Icon: theme.DocumentSaveIcon(), Importance: widget.HighImportance, OnTapped: func() {}}"
        );
    }

    #[test]
    fn test_entry_variants() {
        let mut entry = Widget::new(NodeId::new(1), "*widget.Entry", WidgetProps::default());
        assert_eq!(gostring(&entry), "widget.NewEntry()");

        entry.props.password = true;
        assert_eq!(gostring(&entry), "widget.NewPasswordEntry()");

        entry.props.password = false;
        entry.props.multiline = true;
        assert_eq!(gostring(&entry), "widget.NewMultiLineEntry()");

        entry.props.placeholder = "Notes".into();
        assert_eq!(
            gostring(&entry),
            "&widget.Entry{PlaceHolder: \"Notes\", MultiLine: true, Wrapping: fyne.TextWrapWord}"
        );
    }

    #[test]
    fn test_hyperlink_url() {
        let link = spawn(WidgetKind::Hyperlink, 1);
        assert_eq!(
            gostring(&link),
            "&widget.Hyperlink{Text: \"Open website\", URL: &url.URL{Scheme: \"https\", Host: \"fyne.io\", Path: \"/\"}}"
        );
        assert_eq!(
            url_literal("https://example.com/a/b?x=1#top"),
            "&url.URL{Scheme: \"https\", Host: \"example.com\", Path: \"/a/b\", RawQuery: \"x=1\", Fragment: \"top\"}"
        );
        assert_eq!(
            url_literal("mailto:me@example.com"),
            "&url.URL{Scheme: \"mailto\", Opaque: \"me@example.com\"}"
        );
    }

    #[test]
    fn test_value_widgets() {
        let slider = spawn(WidgetKind::Slider, 1);
        assert_eq!(
            gostring(&slider),
            "&widget.Slider{Min: 0, Max: 100, Value: 42, Step: 1}"
        );

        let mut bar = spawn(WidgetKind::ProgressBar, 2);
        bar.props.value = 3.0;
        assert_eq!(
            gostring(&bar),
            "&widget.ProgressBar{Min: 0, Max: 1, Value: 1}"
        );
    }

    #[test]
    fn test_choice_widgets() {
        let radio = spawn(WidgetKind::RadioGroup, 1);
        assert_eq!(
            gostring(&radio),
            "&widget.RadioGroup{Options: []string{\"Option A\", \"Option B\", \"Option C\"}, Selected: \"Option A\", OnChanged: func(string) {}}"
        );

        let mut select = spawn(WidgetKind::Select, 2);
        select.props.placeholder.clear();
        assert_eq!(
            gostring(&select),
            "widget.NewSelect([]string{\"Red\", \"Green\", \"Blue\"}, func(string) {})"
        );
    }

    #[test]
    fn test_theme_icon_names() {
        assert_eq!(theme_icon("home"), "theme.HomeIcon()");
        assert_eq!(theme_icon("media_play"), "theme.MediaPlayIcon()");
        assert_eq!(theme_icon("SearchIcon"), "theme.SearchIcon()");
    }

    #[test]
    fn test_container_layouts() {
        let id = NodeId::new(1);
        let root = Node::Container(Container::new(
            id,
            vec![
                spawn(WidgetKind::Label, 2).into(),
                spawn(WidgetKind::Separator, 3).into(),
            ],
        ));

        let mut defs = Definitions::new();
        assert_eq!(
            render(&root, &Metadata::new(), &mut defs),
            "container.NewVBox(widget.NewLabel(\"Label\"), widget.NewSeparator())"
        );

        let form = Metadata::new().with(id, LAYOUT_KEY, "Form");
        assert_eq!(
            render(&root, &form, &mut defs),
            "container.New(layout.NewFormLayout(), widget.NewLabel(\"Label\"), widget.NewSeparator())"
        );

        let grid = Metadata::new()
            .with(id, LAYOUT_KEY, "Grid")
            .with(id, COLUMNS_KEY, "3");
        assert_eq!(
            render(&root, &grid, &mut defs),
            "container.NewGridWithColumns(3, widget.NewLabel(\"Label\"), widget.NewSeparator())"
        );
        assert!(defs.is_empty());
    }

    #[test]
    fn test_named_nodes_become_definitions() {
        let label = spawn(WidgetKind::Label, 2);
        let card = spawn(WidgetKind::Card, 1).with_children(vec![label.into()]);
        let meta = Metadata::new()
            .with(NodeId::new(1), NAME_KEY, "card")
            .with(NodeId::new(2), NAME_KEY, "title");

        let mut defs = Definitions::new();
        let code = render(&Node::from(card), &meta, &mut defs);

        assert_eq!(code, "g.card");
        let pairs: Vec<_> = defs.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("title", "widget.NewLabel(\"Label\")"),
                ("card", "widget.NewCard(\"Card\", \"Subtitle\", g.title)"),
            ]
        );
    }

    #[test]
    fn test_composite_content_slots() {
        let empty_card = spawn(WidgetKind::Card, 1);
        assert_eq!(gostring(&empty_card), "widget.NewCard(\"Card\", \"Subtitle\", nil)");

        let scroll = spawn(WidgetKind::Scroll, 2).with_children(vec![
            spawn(WidgetKind::Label, 3).into(),
            spawn(WidgetKind::Label, 4).into(),
        ]);
        assert_eq!(
            gostring(&scroll),
            "container.NewScroll(container.NewVBox(widget.NewLabel(\"Label\"), widget.NewLabel(\"Label\")))"
        );

        let split = spawn(WidgetKind::Split, 5).with_children(vec![
            spawn(WidgetKind::Separator, 6).into(),
            spawn(WidgetKind::Separator, 7).into(),
        ]);
        assert_eq!(
            gostring(&split),
            "container.NewHSplit(widget.NewSeparator(), widget.NewSeparator())"
        );

        let tabs = spawn(WidgetKind::AppTabs, 8).with_children(vec![
            spawn(WidgetKind::Separator, 9).into(),
            spawn(WidgetKind::Separator, 10).into(),
            spawn(WidgetKind::Separator, 11).into(),
        ]);
        assert_eq!(
            gostring(&tabs),
            "container.NewAppTabs(container.NewTabItem(\"Tab 1\", widget.NewSeparator()), container.NewTabItem(\"Tab 2\", widget.NewSeparator()), container.NewTabItem(\"Tab 3\", widget.NewSeparator()))"
        );
    }

    #[test]
    fn test_unregistered_class_zero_value() {
        let gauge = Widget::new(NodeId::new(1), "*custom.Gauge", WidgetProps::default());
        assert_eq!(gostring(&gauge), "&custom.Gauge{}");
        let plain = Widget::new(NodeId::new(2), "custom.Value", WidgetProps::default());
        assert_eq!(gostring(&plain), "custom.Value{}");
    }
}
