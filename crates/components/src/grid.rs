use crate::attributes::Attributes;
use crate::element::{ElementProps, Primitive};

/// Custom property the grid stylesheet reads for its minimum column width.
pub const GRID_MIN_PROPERTY: &str = "--joinery-grid-min";

/// Preset minimum column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMin {
    Sm,
    Md,
    Lg,
    Xl,
    Prose,
}

impl GridMin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Prose => "prose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridGap {
    None,
    Tight,
    Related,
    Distinct,
    Section,
}

impl GridGap {
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

/// Fixed column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cols {
    Two,
    Three,
    Four,
}

impl Cols {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAlign {
    Start,
    Center,
    End,
}

impl GridAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Auto-fit responsive grid.
///
/// `min_width` takes any CSS length and wins over the `min` preset: the value
/// is passed through [`GRID_MIN_PROPERTY`] and `data-min` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub min: Option<GridMin>,
    pub min_width: Option<String>,
    pub gap: Option<GridGap>,
    pub cols: Option<Cols>,
    pub align: Option<GridAlign>,
    pub element: ElementProps,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min(mut self, min: GridMin) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn min_width(mut self, min_width: impl Into<String>) -> Self {
        self.min_width = Some(min_width.into());
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: GridGap) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn cols(mut self, cols: Cols) -> Self {
        self.cols = Some(cols);
        self
    }

    #[must_use]
    pub fn align(mut self, align: GridAlign) -> Self {
        self.align = Some(align);
        self
    }

    fn custom_min_width(&self) -> Option<&str> {
        self.min_width.as_deref().filter(|value| !value.is_empty())
    }
}

impl Primitive for Grid {
    fn base_class(&self) -> &'static str {
        "grid"
    }

    fn element(&self) -> &ElementProps {
        &self.element
    }

    fn element_mut(&mut self) -> &mut ElementProps {
        &mut self.element
    }

    fn write_data_attributes(&self, attributes: &mut Attributes) {
        if self.custom_min_width().is_none() {
            attributes.insert_opt("data-min", self.min.map(GridMin::as_str));
        }
        attributes.insert_opt("data-gap", self.gap.map(GridGap::as_str));
        attributes.insert_opt("data-cols", self.cols.map(Cols::as_str));
        attributes.insert_opt("data-align", self.align.map(GridAlign::as_str));
    }

    fn style(&self) -> Option<String> {
        let base = self.element.style.as_deref();
        let Some(min_width) = self.custom_min_width() else {
            return base.map(str::to_string);
        };

        let declaration = format!("{}: {}", GRID_MIN_PROPERTY, min_width);
        match base.map(|s| s.trim().trim_end_matches(';')) {
            Some(existing) if !existing.is_empty() => {
                Some(format!("{}; {}", existing, declaration))
            }
            _ => Some(declaration),
        }
    }
}
