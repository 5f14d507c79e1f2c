use crate::attributes::Attributes;
use crate::element::{ElementProps, Primitive};

/// Semantic gap between stacked children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackGap {
    None,
    Tight,
    Related,
    Distinct,
    Section,
    Page,
}

impl StackGap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tight => "tight",
            Self::Related => "related",
            Self::Distinct => "distinct",
            Self::Section => "section",
            Self::Page => "page",
        }
    }
}

/// Child index after which the remaining children are pushed to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAfter {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl SplitAfter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }
}

/// Vertical rhythm between child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub gap: Option<StackGap>,
    /// Apply the spacing to all descendants, not just direct children
    pub recursive: bool,
    pub split_after: Option<SplitAfter>,
    pub element: ElementProps,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gap(mut self, gap: StackGap) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn split_after(mut self, split_after: SplitAfter) -> Self {
        self.split_after = Some(split_after);
        self
    }
}

impl Primitive for Stack {
    fn base_class(&self) -> &'static str {
        "stack"
    }

    fn element(&self) -> &ElementProps {
        &self.element
    }

    fn element_mut(&mut self) -> &mut ElementProps {
        &mut self.element
    }

    fn write_data_attributes(&self, attributes: &mut Attributes) {
        attributes.insert_opt("data-gap", self.gap.map(StackGap::as_str));
        attributes.insert_flag("data-recursive", self.recursive);
        attributes.insert_opt("data-split-after", self.split_after.map(SplitAfter::as_str));
    }
}
