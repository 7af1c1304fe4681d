use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MONTH_ABBREVS, MONTH_NAMES};
use crate::format::MonthStyle;

/// Which control a select block stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKind {
    Day,
    Month,
    Year,
    QuickDates,
}

/// One entry of a select block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionItem {
    pub label: String,
    pub selectable: bool,
}

impl OptionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selectable: true,
        }
    }

    /// A heading entry that cannot be chosen, such as `"Quick Dates"`.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selectable: false,
        }
    }
}

/// A selectable control: its kind, its options in display order, and the
/// index of the currently selected option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectBlock {
    pub kind: SelectKind,
    pub options: Vec<OptionItem>,
    pub selected: usize,
}

impl SelectBlock {
    /// Option labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }
}

/// One rendered segment of the widget: literal text or a select control,
/// in pattern order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Text(String),
    Select(SelectBlock),
}

impl Node {
    pub const fn as_select(&self) -> Option<&SelectBlock> {
        match self {
            Self::Select(block) => Some(block),
            Self::Text(_) => None,
        }
    }

    /// The segment's static text. Literal runs appear verbatim and the
    /// month control contributes its option labels; the day and year
    /// spinners and the quick-date list keep their options collapsed and
    /// contribute nothing.
    pub fn inline_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Select(block) if block.kind == SelectKind::Month => block.labels().collect(),
            Self::Select(_) => String::new(),
        }
    }
}

/// Concatenated static text of a node sequence.
pub fn inline_text(nodes: &[Node]) -> String {
    nodes.iter().map(Node::inline_text).collect()
}

/// Day options: `01` through `31`, independent of month and year.
pub(crate) fn day_options() -> Vec<OptionItem> {
    (MIN_DAY..=MAX_DAY)
        .map(|d| OptionItem::new(format!("{d:02}")))
        .collect()
}

/// Month options labeled per the pattern's style.
pub(crate) fn month_options(style: MonthStyle) -> Vec<OptionItem> {
    (1..=MAX_MONTH)
        .map(|m| {
            let label = match style {
                MonthStyle::Numeric => format!("{m:02}"),
                MonthStyle::Abbreviated => MONTH_ABBREVS[(m - 1) as usize].to_owned(),
                MonthStyle::Full => MONTH_NAMES[(m - 1) as usize].to_owned(),
            };
            OptionItem::new(label)
        })
        .collect()
}

/// Year options for an inclusive year range, labeled with the full
/// numeric year regardless of the pattern's year run length.
pub(crate) fn year_options(lo: u16, hi: u16) -> Vec<OptionItem> {
    (lo..=hi).map(|y| OptionItem::new(y.to_string())).collect()
}
