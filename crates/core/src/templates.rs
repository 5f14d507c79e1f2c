//! Text of every file `joinery init` generates.
//!
//! Stylesheets are static and embedded at compile time. The CSS entry file and
//! the UI component sources are rendered from the [`PrimitiveCatalog`], so a
//! primitive added to the catalog shows up everywhere without further edits.

use std::collections::HashMap;

use leon::Template;

use crate::error::Result;
use crate::primitives::{PrimitiveCatalog, PrimitiveDefinition, PropKind};

/// Token stylesheets, written to `tokens/<name>.css` in this order.
pub const TOKEN_FILES: &[(&str, &str)] = &[
    ("spacing", include_str!("../templates/tokens/spacing.css")),
    ("measure", include_str!("../templates/tokens/measure.css")),
    ("typography", include_str!("../templates/tokens/typography.css")),
    ("elevation", include_str!("../templates/tokens/elevation.css")),
    ("radius", include_str!("../templates/tokens/radius.css")),
];

pub const TOKENS_DIR: &str = "tokens";
pub const PRIMITIVES_DIR: &str = "primitives";
pub const CSS_INDEX_FILE: &str = "index.css";

const CSS_INDEX_HEADER: &str = "/**\n * Joinery - Import this file for all styles\n */\n";
const CSS_IMPORT_TEMPLATE: &str = "@import './{dir}/{name}.css';";
const CSS_IMPORT_HINT_TEMPLATE: &str = "@import '{css_path}/index.css';";

const TS_TYPE_IMPORT: &str =
    "import type { ElementType, ReactNode, HTMLAttributes, CSSProperties } from 'react'";

fn render_template(template: &str, values: &HashMap<String, String>) -> Result<String> {
    Ok(Template::parse(template)?.render(&values)?)
}

fn css_import(dir: &str, name: &str) -> Result<String> {
    let values = HashMap::from([
        ("dir".to_string(), dir.to_string()),
        ("name".to_string(), name.to_string()),
    ]);
    render_template(CSS_IMPORT_TEMPLATE, &values)
}

/// Renders `index.css`, importing every token file then every catalog primitive.
///
/// # Errors
///
/// Returns an error if an import line fails to render.
pub fn render_css_index(catalog: &PrimitiveCatalog) -> Result<String> {
    let mut lines = vec![CSS_INDEX_HEADER.to_string(), "/* Tokens */".to_string()];

    for (name, _) in TOKEN_FILES {
        lines.push(css_import(TOKENS_DIR, name)?);
    }

    lines.push(String::new());
    lines.push("/* Primitives */".to_string());

    for definition in catalog.definitions() {
        lines.push(css_import(PRIMITIVES_DIR, definition.name)?);
    }

    let mut index = lines.join("\n");
    index.push('\n');
    Ok(index)
}

/// The line an app adds to its own stylesheet to pull in every Joinery style.
///
/// # Errors
///
/// Returns an error if the hint fails to render.
pub fn css_import_hint(css_path: &str) -> Result<String> {
    let values = HashMap::from([("css_path".to_string(), css_path.trim_end_matches('/').to_string())]);
    render_template(CSS_IMPORT_HINT_TEMPLATE, &values)
}

/// File name of a generated component, e.g. `Stack.tsx`.
#[must_use]
pub fn component_file_name(definition: &PrimitiveDefinition, extension: &str) -> String {
    format!("{}.{extension}", definition.component)
}

fn write_type_declarations(source: &mut String, definition: &PrimitiveDefinition) {
    for prop in definition.props {
        if let PropKind::Choice { type_name, options } = prop.kind {
            let union = options.iter().map(|option| format!("'{option}'")).collect::<Vec<_>>();
            source.push_str(&format!("type {type_name} = {}\n", union.join(" | ")));
        }
    }

    source.push('\n');
    source.push_str("interface Props extends HTMLAttributes<HTMLElement> {\n");
    for prop in definition.props {
        source.push_str(&format!("  {}?: {}\n", prop.name, prop.ts_type()));
    }
    source.push_str("  as?: ElementType\n");
    source.push_str("  children: ReactNode\n");
    source.push_str("}\n\n");
}

fn custom_property(definition: &PrimitiveDefinition) -> Option<(&'static str, &'static str, &'static str)> {
    definition.props.iter().find_map(|prop| match prop.kind {
        PropKind::CustomProperty { variable, replaces } => Some((prop.name, variable, replaces)),
        _ => None,
    })
}

/// Renders the source of a single presentational component.
///
/// The component forwards its props as `data-*` attributes on a polymorphic
/// element carrying the primitive's class.
#[must_use]
pub fn render_component(definition: &PrimitiveDefinition, typescript: bool) -> String {
    let mut source = String::new();
    let custom = custom_property(definition);

    if typescript {
        source.push_str(TS_TYPE_IMPORT);
        source.push_str("\n\n");
        write_type_declarations(&mut source, definition);
    }

    source.push_str(&format!("export function {}({{\n", definition.component));
    for prop in definition.props {
        source.push_str(&format!("  {},\n", prop.name));
    }
    source.push_str("  as: Tag = 'div',\n");
    source.push_str("  children,\n");
    source.push_str("  className = '',\n");
    if custom.is_some() {
        source.push_str("  style,\n");
    }
    source.push_str("  ...props\n");
    source.push_str(&format!("}}{}) {{\n", if typescript { ": Props" } else { "" }));

    if let Some((name, variable, _)) = custom {
        let annotation = if typescript { ": CSSProperties" } else { "" };
        source.push_str(&format!("  const customStyle{annotation} = {{\n"));
        source.push_str("    ...style,\n");
        source.push_str(&format!("    ...({name} && {{ '{variable}': {name} }}),\n"));
        source.push_str("  }\n\n");
    }

    source.push_str("  return (\n");
    source.push_str("    <Tag\n");
    source.push_str(&format!(
        "      className={{`{} ${{className}}`.trim()}}\n",
        definition.name
    ));
    for prop in definition.props {
        let attribute = prop.data_attribute();
        match (prop.kind, custom) {
            (PropKind::CustomProperty { .. }, _) => {}
            (PropKind::Flag, _) => {
                source.push_str(&format!("      {attribute}={{{} || undefined}}\n", prop.name));
            }
            (_, Some((custom_name, _, replaces))) if replaces == prop.name => {
                source.push_str(&format!(
                    "      {attribute}={{{custom_name} ? undefined : {}}}\n",
                    prop.name
                ));
            }
            _ => {
                source.push_str(&format!("      {attribute}={{{}}}\n", prop.name));
            }
        }
    }
    if let Some((name, _, _)) = custom {
        source.push_str(&format!("      style={{{name} ? customStyle : style}}\n"));
    }
    source.push_str("      {...props}\n");
    source.push_str("    >\n");
    source.push_str("      {children}\n");
    source.push_str("    </Tag>\n");
    source.push_str("  )\n");
    source.push_str("}\n");

    source
}

/// Renders the component entry file re-exporting every catalog component.
#[must_use]
pub fn render_component_index(catalog: &PrimitiveCatalog) -> String {
    catalog
        .definitions()
        .iter()
        .map(|definition| {
            format!(
                "export {{ {} }} from './{}'\n",
                definition.component, definition.component
            )
        })
        .collect()
}
