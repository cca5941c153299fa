use std::fmt;

/// Well-known bucket (slot) names used by reference points and insights.
///
/// Bucket names travel over the wire as plain strings; this enum is the typed view of that
/// vocabulary. Use [`BucketName::parse`] to classify a wire name and [`BucketName::role`] to find
/// out which part of a table/chart layout the bucket feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketName {
    Measures,
    SecondaryMeasures,
    TertiaryMeasures,
    Attribute,
    Attributes,
    View,
    Stack,
    Trend,
    Segment,
    Rows,
    Columns,
    Filters,
    Location,
    Size,
    Color,
}

/// Layout role a bucket plays when a reference point is adapted to a visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketRole {
    Measures,
    RowAttributes,
    ColumnAttributes,
    Filters,
    Other,
}

/// Lookup table: wire name, typed name, role.
const BUCKET_NAME_TABLE: &[(&str, BucketName, BucketRole)] = &[
    ("measures", BucketName::Measures, BucketRole::Measures),
    ("secondary_measures", BucketName::SecondaryMeasures, BucketRole::Measures),
    ("tertiary_measures", BucketName::TertiaryMeasures, BucketRole::Measures),
    ("attribute", BucketName::Attribute, BucketRole::RowAttributes),
    ("attributes", BucketName::Attributes, BucketRole::RowAttributes),
    ("view", BucketName::View, BucketRole::RowAttributes),
    ("trend", BucketName::Trend, BucketRole::RowAttributes),
    ("stack", BucketName::Stack, BucketRole::ColumnAttributes),
    ("segment", BucketName::Segment, BucketRole::ColumnAttributes),
    ("columns", BucketName::Columns, BucketRole::ColumnAttributes),
    // The pivot table emits its rows under `attribute`; `rows` is kept for other visualizations.
    ("rows", BucketName::Rows, BucketRole::Other),
    ("filters", BucketName::Filters, BucketRole::Filters),
    ("location", BucketName::Location, BucketRole::Other),
    ("size", BucketName::Size, BucketRole::Other),
    ("color", BucketName::Color, BucketRole::Other),
];

impl BucketName {
    /// Classifies a wire bucket name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        BUCKET_NAME_TABLE
            .iter()
            .find(|(wire, _, _)| *wire == name)
            .map(|(_, bucket, _)| *bucket)
    }

    pub fn as_str(self) -> &'static str {
        BUCKET_NAME_TABLE
            .iter()
            .find(|(_, bucket, _)| *bucket == self)
            .map(|(wire, _, _)| *wire)
            .unwrap_or_default()
    }

    pub fn role(self) -> BucketRole {
        BUCKET_NAME_TABLE
            .iter()
            .find(|(_, bucket, _)| *bucket == self)
            .map(|(_, _, role)| *role)
            .unwrap_or(BucketRole::Other)
    }

    /// All known bucket names that play `role`, in table order.
    pub fn with_role(role: BucketRole) -> impl Iterator<Item = BucketName> {
        BUCKET_NAME_TABLE
            .iter()
            .filter(move |(_, _, r)| *r == role)
            .map(|(_, bucket, _)| *bucket)
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a wire bucket name; unknown names are [`BucketRole::Other`].
pub fn bucket_role(name: &str) -> BucketRole {
    BucketName::parse(name)
        .map(BucketName::role)
        .unwrap_or(BucketRole::Other)
}
