use crate::attributes::Attributes;
use crate::element::{ElementProps, Primitive};

/// Maximum width of the centred column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Narrow,
    Prose,
    Wide,
    Full,
}

impl Measure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Prose => "prose",
            Self::Wide => "wide",
            Self::Full => "full",
        }
    }
}

/// Minimum space kept on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gutters {
    None,
    Related,
    Distinct,
    Section,
}

impl Gutters {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Related => "related",
            Self::Distinct => "distinct",
            Self::Section => "section",
        }
    }
}

/// Horizontally centred content column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Center {
    pub measure: Option<Measure>,
    /// Centre children by their content width
    pub intrinsic: bool,
    pub text_center: bool,
    pub gutters: Option<Gutters>,
    pub no_gutters: bool,
    pub element: ElementProps,
}

impl Center {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn measure(mut self, measure: Measure) -> Self {
        self.measure = Some(measure);
        self
    }

    #[must_use]
    pub fn intrinsic(mut self, intrinsic: bool) -> Self {
        self.intrinsic = intrinsic;
        self
    }

    #[must_use]
    pub fn text_center(mut self, text_center: bool) -> Self {
        self.text_center = text_center;
        self
    }

    #[must_use]
    pub fn gutters(mut self, gutters: Gutters) -> Self {
        self.gutters = Some(gutters);
        self
    }

    #[must_use]
    pub fn no_gutters(mut self, no_gutters: bool) -> Self {
        self.no_gutters = no_gutters;
        self
    }
}

impl Primitive for Center {
    fn base_class(&self) -> &'static str {
        "center"
    }

    fn element(&self) -> &ElementProps {
        &self.element
    }

    fn element_mut(&mut self) -> &mut ElementProps {
        &mut self.element
    }

    fn write_data_attributes(&self, attributes: &mut Attributes) {
        attributes.insert_opt("data-measure", self.measure.map(Measure::as_str));
        attributes.insert_flag("data-intrinsic", self.intrinsic);
        attributes.insert_flag("data-text-center", self.text_center);
        attributes.insert_opt("data-gutters", self.gutters.map(Gutters::as_str));
        attributes.insert_flag("data-no-gutters", self.no_gutters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_flags() {
        let center = Center::new()
            .measure(Measure::Wide)
            .intrinsic(true)
            .text_center(true)
            .no_gutters(true);

        assert_eq!(
            center.attributes().render(),
            r#" class="center" data-measure="wide" data-intrinsic data-text-center data-no-gutters"#
        );
    }

    #[test]
    fn test_center_extra_class_is_appended() {
        let center = Center::new().with_class("  hero ");
        assert_eq!(center.class_name(), "center   hero");
    }
}
