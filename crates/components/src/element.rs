use crate::attributes::Attributes;

/// Tag used when a primitive is not given one.
pub const DEFAULT_TAG: &str = "div";

/// Props every primitive forwards to its element untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementProps {
    /// Element to render as; `div` when unset
    pub tag: Option<String>,
    /// Extra classes appended after the primitive's own class
    pub class_name: Option<String>,
    /// Inline style declarations
    pub style: Option<String>,
    /// Any other attributes, rendered last
    pub attributes: Attributes,
}

/// A layout primitive: a CSS class plus `data-*` attributes on a single element.
///
/// Implementors only describe their base class and their own props; class
/// merging, attribute ordering and rendering are shared.
pub trait Primitive {
    /// The class the primitive's stylesheet targets.
    fn base_class(&self) -> &'static str;

    fn element(&self) -> &ElementProps;

    fn element_mut(&mut self) -> &mut ElementProps;

    /// Adds the primitive's `data-*` attributes for every prop that is set.
    fn write_data_attributes(&self, attributes: &mut Attributes);

    /// Inline style for the element. Defaults to the forwarded style.
    fn style(&self) -> Option<String> {
        self.element().style.clone()
    }

    fn tag(&self) -> &str {
        self.element().tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    /// Base class followed by any extra classes, trimmed.
    fn class_name(&self) -> String {
        let extra = self.element().class_name.as_deref().unwrap_or("");
        format!("{} {}", self.base_class(), extra).trim().to_string()
    }

    /// `class`, then data attributes, then `style`, then forwarded attributes.
    fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("class", self.class_name());
        self.write_data_attributes(&mut attributes);
        if let Some(style) = self.style() {
            attributes.insert("style", style);
        }
        attributes.extend(&self.element().attributes);
        attributes
    }

    /// Renders the element around `children`, which is inserted as-is.
    fn render(&self, children: &str) -> String {
        let tag = self.tag();
        format!("<{}{}>{}</{}>", tag, self.attributes().render(), children, tag)
    }

    #[must_use]
    fn as_tag(mut self, tag: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.element_mut().tag = Some(tag.into());
        self
    }

    #[must_use]
    fn with_class(mut self, class_name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.element_mut().class_name = Some(class_name.into());
        self
    }

    #[must_use]
    fn with_style(mut self, style: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.element_mut().style = Some(style.into());
        self
    }

    #[must_use]
    fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.element_mut().attributes.insert(name, value);
        self
    }
}
