use crate::attributes::Attributes;
use crate::element::{ElementProps, Primitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    None,
    Tight,
    Related,
    Distinct,
    Section,
}

impl Padding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tight => "tight",
            Self::Related => "related",
            Self::Distinct => "distinct",
            Self::Section => "section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    None,
    Thin,
    Medium,
    Thick,
}

impl Border {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Thick => "thick",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxPattern {
    Card,
    Filled,
    Well,
}

impl BoxPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Filled => "filled",
            Self::Well => "well",
        }
    }
}

/// Padding container with optional border and background (class `box`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxElement {
    pub padding: Option<Padding>,
    pub border: Option<Border>,
    /// Dark background, light text
    pub invert: bool,
    pub pattern: Option<BoxPattern>,
    pub element: ElementProps,
}

impl BoxElement {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: BoxPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl Primitive for BoxElement {
    fn base_class(&self) -> &'static str {
        "box"
    }

    fn element(&self) -> &ElementProps {
        &self.element
    }

    fn element_mut(&mut self) -> &mut ElementProps {
        &mut self.element
    }

    fn write_data_attributes(&self, attributes: &mut Attributes) {
        attributes.insert_opt("data-padding", self.padding.map(Padding::as_str));
        attributes.insert_opt("data-border", self.border.map(Border::as_str));
        attributes.insert_flag("data-invert", self.invert);
        attributes.insert_opt("data-pattern", self.pattern.map(BoxPattern::as_str));
    }
}
