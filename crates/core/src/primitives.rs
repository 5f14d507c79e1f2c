//! The catalog of layout primitives Joinery knows how to install.
//!
//! The catalog is the single allow-list shared by argument validation, the
//! interactive picker, the generated CSS entry file and component generation.
//! Callers receive it as a value so alternative catalogs can be injected.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::{Error, Result};

/// How a component prop is typed and forwarded to the rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// One of a closed set of string values, declared as a named type alias.
    Choice {
        type_name: &'static str,
        options: &'static [&'static str],
    },
    /// Boolean prop, forwarded as a valueless data attribute when true.
    Flag,
    /// Prop whose type is written out verbatim (e.g. a numeric literal union).
    Literal { ts_type: &'static str },
    /// Free-form CSS value written to a custom property on `style`.
    /// When set it suppresses the data attribute of the `replaces` prop.
    CustomProperty {
        variable: &'static str,
        replaces: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropDefinition {
    pub name: &'static str,
    pub kind: PropKind,
}

impl PropDefinition {
    /// The `data-*` attribute this prop is forwarded as, e.g. `splitAfter` → `data-split-after`.
    #[must_use]
    pub fn data_attribute(&self) -> String {
        let mut attribute = String::from("data-");
        for c in self.name.chars() {
            if c.is_ascii_uppercase() {
                attribute.push('-');
                attribute.push(c.to_ascii_lowercase());
            } else {
                attribute.push(c);
            }
        }
        attribute
    }

    /// The TypeScript type annotation for this prop.
    #[must_use]
    pub fn ts_type(&self) -> &'static str {
        match self.kind {
            PropKind::Choice { type_name, .. } => type_name,
            PropKind::Flag => "boolean",
            PropKind::Literal { ts_type } => ts_type,
            PropKind::CustomProperty { .. } => "string",
        }
    }
}

/// A single installable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveDefinition {
    /// Allow-list key and CSS class name.
    pub name: &'static str,
    /// Name of the generated UI component.
    pub component: &'static str,
    /// Static stylesheet written to `primitives/<name>.css`.
    pub stylesheet: &'static str,
    pub props: &'static [PropDefinition],
}

impl PrimitiveDefinition {
    /// Display label used by the interactive picker (`stack` → `Stack`).
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Display for PrimitiveDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name)
    }
}

const GAP_NARROW: &[&str] = &["none", "tight", "related", "distinct"];

const STACK_PROPS: &[PropDefinition] = &[
    PropDefinition {
        name: "gap",
        kind: PropKind::Choice {
            type_name: "Gap",
            options: &["none", "tight", "related", "distinct", "section", "page"],
        },
    },
    PropDefinition {
        name: "recursive",
        kind: PropKind::Flag,
    },
    PropDefinition {
        name: "splitAfter",
        kind: PropKind::Literal {
            ts_type: "1 | 2 | 3 | 4 | 5",
        },
    },
];

const CLUSTER_PROPS: &[PropDefinition] = &[
    PropDefinition {
        name: "gap",
        kind: PropKind::Choice {
            type_name: "Gap",
            options: GAP_NARROW,
        },
    },
    PropDefinition {
        name: "justify",
        kind: PropKind::Choice {
            type_name: "Justify",
            options: &["start", "center", "end", "between"],
        },
    },
    PropDefinition {
        name: "align",
        kind: PropKind::Choice {
            type_name: "Align",
            options: &["start", "center", "end", "stretch"],
        },
    },
];

const GRID_PROPS: &[PropDefinition] = &[
    PropDefinition {
        name: "min",
        kind: PropKind::Choice {
            type_name: "MinWidth",
            options: &["sm", "md", "lg", "xl"],
        },
    },
    PropDefinition {
        name: "minWidth",
        kind: PropKind::CustomProperty {
            variable: "--joinery-grid-min",
            replaces: "min",
        },
    },
    PropDefinition {
        name: "gap",
        kind: PropKind::Choice {
            type_name: "Gap",
            options: GAP_NARROW,
        },
    },
];

const CENTER_PROPS: &[PropDefinition] = &[
    PropDefinition {
        name: "measure",
        kind: PropKind::Choice {
            type_name: "Measure",
            options: &["narrow", "prose", "wide", "full"],
        },
    },
    PropDefinition {
        name: "intrinsic",
        kind: PropKind::Flag,
    },
    PropDefinition {
        name: "noGutters",
        kind: PropKind::Flag,
    },
];

const BOX_PROPS: &[PropDefinition] = &[
    PropDefinition {
        name: "padding",
        kind: PropKind::Choice {
            type_name: "Padding",
            options: GAP_NARROW,
        },
    },
    PropDefinition {
        name: "border",
        kind: PropKind::Choice {
            type_name: "Border",
            options: &["none", "thin", "medium", "thick"],
        },
    },
    PropDefinition {
        name: "invert",
        kind: PropKind::Flag,
    },
    PropDefinition {
        name: "pattern",
        kind: PropKind::Choice {
            type_name: "Pattern",
            options: &["card", "filled", "well"],
        },
    },
];

// TODO: add sidebar, switcher, cover, frame, reel and surface once their stylesheets are written.
/// Primitives shipped with Joinery, in installation and import order.
pub const BUILTIN_PRIMITIVES: &[PrimitiveDefinition] = &[
    PrimitiveDefinition {
        name: "stack",
        component: "Stack",
        stylesheet: include_str!("../templates/primitives/stack.css"),
        props: STACK_PROPS,
    },
    PrimitiveDefinition {
        name: "cluster",
        component: "Cluster",
        stylesheet: include_str!("../templates/primitives/cluster.css"),
        props: CLUSTER_PROPS,
    },
    PrimitiveDefinition {
        name: "grid",
        component: "Grid",
        stylesheet: include_str!("../templates/primitives/grid.css"),
        props: GRID_PROPS,
    },
    PrimitiveDefinition {
        name: "center",
        component: "Center",
        stylesheet: include_str!("../templates/primitives/center.css"),
        props: CENTER_PROPS,
    },
    PrimitiveDefinition {
        name: "box",
        component: "Box",
        stylesheet: include_str!("../templates/primitives/box.css"),
        props: BOX_PROPS,
    },
];

/// Ordered allow-list of primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveCatalog {
    definitions: Vec<PrimitiveDefinition>,
}

impl Default for PrimitiveCatalog {
    fn default() -> Self {
        Self::new(BUILTIN_PRIMITIVES.to_vec())
    }
}

impl PrimitiveCatalog {
    #[must_use]
    pub fn new(definitions: Vec<PrimitiveDefinition>) -> Self {
        Self { definitions }
    }

    #[must_use]
    pub fn definitions(&self) -> &[PrimitiveDefinition] {
        &self.definitions
    }

    /// All primitive names in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|definition| definition.name.to_string())
            .collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PrimitiveDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Checks every requested name against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitives`] listing each unrecognised name once,
    /// in the order given, along with the full catalog.
    pub fn validate<S: AsRef<str>>(&self, requested: &[S]) -> Result<()> {
        let invalid: Vec<String> = requested
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.contains(name))
            .unique()
            .map(ToString::to_string)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(Error::unknown_primitives(invalid, self.names()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = PrimitiveCatalog::default();
        assert_eq!(
            catalog.names(),
            vec!["stack", "cluster", "grid", "center", "box"]
        );
    }

    #[test]
    fn test_validate_accepts_known_names() {
        let catalog = PrimitiveCatalog::default();
        assert!(catalog.validate(&["grid", "box"]).is_ok());
        assert!(catalog.validate::<&str>(&[]).is_ok());
    }

    #[test]
    fn test_validate_reports_each_unknown_name_once() {
        let catalog = PrimitiveCatalog::default();
        let result = catalog.validate(&["grid", "sidebar", "reel", "sidebar"]);

        match result {
            Err(Error::UnknownPrimitives { invalid, available }) => {
                assert_eq!(invalid, vec!["sidebar", "reel"]);
                assert_eq!(available, catalog.names());
            }
            other => panic!("Expected UnknownPrimitives, got {other:?}"),
        }
    }

    #[test]
    fn test_injected_catalog_is_respected() {
        let catalog = PrimitiveCatalog::new(vec![BUILTIN_PRIMITIVES[0]]);
        assert!(catalog.contains("stack"));
        assert!(!catalog.contains("grid"));
        assert!(catalog.validate(&["grid"]).is_err());
    }

    #[test]
    fn test_label_capitalises_name() {
        let catalog = PrimitiveCatalog::default();
        assert_eq!(catalog.get("cluster").unwrap().label(), "Cluster");
    }

    #[test]
    fn test_data_attribute_is_kebab_case() {
        let split_after = STACK_PROPS[2];
        assert_eq!(split_after.data_attribute(), "data-split-after");

        let gap = STACK_PROPS[0];
        assert_eq!(gap.data_attribute(), "data-gap");
    }

    #[test]
    fn test_ts_types() {
        assert_eq!(STACK_PROPS[0].ts_type(), "Gap");
        assert_eq!(STACK_PROPS[1].ts_type(), "boolean");
        assert_eq!(STACK_PROPS[2].ts_type(), "1 | 2 | 3 | 4 | 5");
        assert_eq!(GRID_PROPS[1].ts_type(), "string");
    }

    #[test]
    fn test_stylesheets_match_class_names() {
        for definition in BUILTIN_PRIMITIVES {
            assert!(definition
                .stylesheet
                .contains(&format!(".{} {{", definition.name)));
        }
    }
}
