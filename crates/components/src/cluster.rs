use crate::attributes::Attributes;
use crate::element::{ElementProps, Primitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterGap {
    None,
    Tight,
    Related,
    Distinct,
}

impl ClusterGap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tight => "tight",
            Self::Related => "related",
            Self::Distinct => "distinct",
        }
    }
}

/// Horizontal distribution of the cluster's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl Justify {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Between => "between",
            Self::Around => "around",
            Self::Evenly => "evenly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAlign {
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

impl ClusterAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
        }
    }
}

/// Preset layouts, e.g. `Header` puts the first child left and the rest right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterPattern {
    Header,
    Center,
    Actions,
}

impl ClusterPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Center => "center",
            Self::Actions => "actions",
        }
    }
}

/// Horizontal grouping that wraps when space runs out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    pub gap: Option<ClusterGap>,
    pub justify: Option<Justify>,
    pub align: Option<ClusterAlign>,
    pub pattern: Option<ClusterPattern>,
    pub element: ElementProps,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gap(mut self, gap: ClusterGap) -> Self {
        self.gap = Some(gap);
        self
    }

    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    #[must_use]
    pub fn align(mut self, align: ClusterAlign) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: ClusterPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl Primitive for Cluster {
    fn base_class(&self) -> &'static str {
        "cluster"
    }

    fn element(&self) -> &ElementProps {
        &self.element
    }

    fn element_mut(&mut self) -> &mut ElementProps {
        &mut self.element
    }

    fn write_data_attributes(&self, attributes: &mut Attributes) {
        attributes.insert_opt("data-gap", self.gap.map(ClusterGap::as_str));
        attributes.insert_opt("data-justify", self.justify.map(Justify::as_str));
        attributes.insert_opt("data-align", self.align.map(ClusterAlign::as_str));
        attributes.insert_opt("data-pattern", self.pattern.map(ClusterPattern::as_str));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_attribute_order() {
        let cluster = Cluster::new()
            .pattern(ClusterPattern::Header)
            .gap(ClusterGap::Tight)
            .justify(Justify::Between)
            .align(ClusterAlign::Baseline);

        assert_eq!(
            cluster.attributes().names(),
            vec!["class", "data-gap", "data-justify", "data-align", "data-pattern"]
        );
        assert_eq!(cluster.attributes().get("data-justify"), Some(Some("between")));
    }

    #[test]
    fn test_cluster_as_nav() {
        let cluster = Cluster::new().gap(ClusterGap::Related).as_tag("nav");
        assert_eq!(
            cluster.render("<a>x</a>"),
            r#"<nav class="cluster" data-gap="related"><a>x</a></nav>"#
        );
    }
}
