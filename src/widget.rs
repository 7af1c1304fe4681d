use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::{BoundsError, DateBounds};
use crate::consts::{DEFAULT_FORMAT, DEFAULT_YEAR_SPAN, MAX_DAY, MAX_YEAR, MIN_DAY, QUICK_DATES_LABEL};
use crate::format::{FormatError, FormatPattern, Token};
use crate::render::{Node, OptionItem, SelectBlock, SelectKind, day_options, month_options, year_options};
use crate::types::{Month, Year, days_in_month};
use crate::{ParseError, PickerDate};

/// A predefined shortcut date with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickDate {
    date: PickerDate,
    description: String,
}

impl QuickDate {
    pub fn new(date: PickerDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }

    /// Returns the shortcut's date
    pub const fn date(&self) -> PickerDate {
        self.date
    }

    /// Returns the shortcut's description
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Everything a picker is constructed from. The host owns the value; the
/// widget reads and writes it through [`DatePicker`] but keeps no second
/// copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Format pattern source, `"MMddyyyy"` by default; `"empty"` renders
    /// no date fields.
    pub format: String,
    /// The bound date.
    pub value: PickerDate,
    /// Optional lower bound.
    pub min_date: Option<PickerDate>,
    /// Optional upper bound.
    pub max_date: Option<PickerDate>,
    /// Optional shortcut list; non-empty lists add a trailing quick-dates
    /// select.
    pub quick_dates: Vec<QuickDate>,
}

impl PickerConfig {
    pub fn new(value: PickerDate) -> Self {
        Self {
            format: DEFAULT_FORMAT.to_owned(),
            value,
            min_date: None,
            max_date: None,
            quick_dates: Vec::new(),
        }
    }
}

/// Error type for widget construction and operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// Error validating a date component.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Error parsing the format pattern.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Error validating the bounds window.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Quick-date selection index past the end of the list.
    #[error("No quick date at index {0}")]
    UnknownQuickDate(usize),
}

type ChangeListener = Box<dyn FnMut(&PickerDate)>;

/// A day/month/year picker model.
///
/// Renders as an ordered sequence of [`Node`]s: one select block per field
/// token in pattern order with literal text interleaved, plus one trailing
/// quick-dates block when shortcuts are configured. Every value change runs
/// through bounds clamping and change notification; `value()` is always the
/// single source of truth.
pub struct DatePicker {
    pattern: FormatPattern,
    value: PickerDate,
    bounds: DateBounds,
    quick_dates: Vec<QuickDate>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("pattern", &self.pattern)
            .field("value", &self.value)
            .field("bounds", &self.bounds)
            .field("quick_dates", &self.quick_dates)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DatePicker {
    /// Builds a picker from its configuration. An out-of-range initial
    /// value is clamped into the bounds window, never an error.
    ///
    /// # Errors
    /// Returns `WidgetError` if the format pattern is invalid or
    /// `min_date > max_date`.
    pub fn new(config: PickerConfig) -> Result<Self, WidgetError> {
        let pattern: FormatPattern = config.format.parse()?;
        let bounds = DateBounds::new(config.min_date, config.max_date)?;
        let value = bounds.clamp(config.value);

        Ok(Self {
            pattern,
            value,
            bounds,
            quick_dates: config.quick_dates,
            listeners: Vec::new(),
        })
    }

    /// Returns the bound date
    pub const fn value(&self) -> PickerDate {
        self.value
    }

    /// Returns the parsed format pattern
    pub const fn pattern(&self) -> &FormatPattern {
        &self.pattern
    }

    /// Returns the bounds window
    pub const fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Returns the shortcut list
    pub fn quick_dates(&self) -> &[QuickDate] {
        &self.quick_dates
    }

    /// Registers a listener called with the post-clamp value after every
    /// successful mutation.
    pub fn on_change(&mut self, listener: impl FnMut(&PickerDate) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Selects a day of month from the day control.
    ///
    /// Days past the current month's end clamp to its last day; the option
    /// list always offers 01-31.
    ///
    /// # Errors
    /// Returns `WidgetError::Parse` if `day` is outside 1-31.
    pub fn set_day(&mut self, day: u8) -> Result<(), WidgetError> {
        if !(MIN_DAY..=MAX_DAY).contains(&day) {
            return Err(ParseError::InvalidDay {
                month: self.value.month(),
                day,
                year: self.value.year(),
            }
            .into());
        }
        let clamped = day.min(days_in_month(self.value.year(), self.value.month()));
        let date = PickerDate::from_ymd(self.value.year(), self.value.month(), clamped)?;
        self.apply(date);
        Ok(())
    }

    /// Selects a month from the month control, clamping the day to the new
    /// month's length when needed.
    ///
    /// # Errors
    /// Returns `WidgetError::Parse` if `month` is outside 1-12.
    pub fn set_month(&mut self, month: u8) -> Result<(), WidgetError> {
        let month = Month::new(month)?;
        let day = self
            .value
            .day()
            .min(days_in_month(self.value.year(), month.get()));
        let date = PickerDate::from_ymd(self.value.year(), month.get(), day)?;
        self.apply(date);
        Ok(())
    }

    /// Selects a year from the year control, clamping a February 29th day
    /// when the new year is not a leap year.
    ///
    /// # Errors
    /// Returns `WidgetError::Parse` if `year` is outside 1-9999.
    pub fn set_year(&mut self, year: u16) -> Result<(), WidgetError> {
        let year = Year::new(year)?;
        let day = self
            .value
            .day()
            .min(days_in_month(year.get(), self.value.month()));
        let date = PickerDate::from_ymd(year.get(), self.value.month(), day)?;
        self.apply(date);
        Ok(())
    }

    /// Overwrites the value with a shortcut's date, through the same
    /// clamp-and-notify path as a field change.
    ///
    /// # Errors
    /// Returns `WidgetError::UnknownQuickDate` if `index` is past the end
    /// of the shortcut list.
    pub fn select_quick_date(&mut self, index: usize) -> Result<(), WidgetError> {
        let date = self
            .quick_dates
            .get(index)
            .map(QuickDate::date)
            .ok_or(WidgetError::UnknownQuickDate(index))?;
        self.apply(date);
        Ok(())
    }

    /// Host-driven value replacement, clamped and notified like any other
    /// change.
    pub fn set_value(&mut self, date: PickerDate) {
        self.apply(date);
    }

    /// Replaces the bounds window and re-clamps the current value.
    ///
    /// # Errors
    /// Returns `WidgetError::Bounds` if `min > max`; the previous bounds
    /// stay in place.
    pub fn set_bounds(
        &mut self,
        min: Option<PickerDate>,
        max: Option<PickerDate>,
    ) -> Result<(), WidgetError> {
        self.bounds = DateBounds::new(min, max)?;
        self.apply(self.value);
        Ok(())
    }

    fn apply(&mut self, date: PickerDate) {
        self.value = self.bounds.clamp(date);
        let value = self.value;
        for listener in &mut self.listeners {
            listener(&value);
        }
    }

    /// The inclusive year range offered by the year control: bound years
    /// when present, otherwise the value's year +/- `DEFAULT_YEAR_SPAN`,
    /// always widened to include the value's year.
    pub fn year_range(&self) -> (u16, u16) {
        let anchor = self.value.year();
        let lo = self.bounds.min().map_or_else(
            || anchor.saturating_sub(DEFAULT_YEAR_SPAN).max(1),
            |d| d.year(),
        );
        let hi = self
            .bounds
            .max()
            .map_or_else(|| (anchor + DEFAULT_YEAR_SPAN).min(MAX_YEAR), |d| d.year());
        (lo.min(anchor), hi.max(anchor))
    }

    /// The rendered sequence: literal text and select blocks in pattern
    /// order, plus the trailing quick-dates block when shortcuts are
    /// configured.
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(self.pattern.tokens().len() + 1);
        for token in self.pattern.tokens() {
            nodes.push(match token {
                Token::Literal(text) => Node::Text(text.clone()),
                Token::Day => Node::Select(SelectBlock {
                    kind: SelectKind::Day,
                    options: day_options(),
                    selected: usize::from(self.value.day() - 1),
                }),
                Token::Month(style) => Node::Select(SelectBlock {
                    kind: SelectKind::Month,
                    options: month_options(*style),
                    selected: usize::from(self.value.month() - 1),
                }),
                Token::Year => {
                    let (lo, hi) = self.year_range();
                    Node::Select(SelectBlock {
                        kind: SelectKind::Year,
                        options: year_options(lo, hi),
                        selected: usize::from(self.value.year() - lo),
                    })
                }
            });
        }
        if !self.quick_dates.is_empty() {
            nodes.push(Node::Select(self.quick_dates_block()));
        }
        nodes
    }

    /// The select blocks only, in render order.
    pub fn blocks(&self) -> Vec<SelectBlock> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Select(block) => Some(block),
                Node::Text(_) => None,
            })
            .collect()
    }

    /// The widget's static text (see [`Node::inline_text`]).
    pub fn inline_text(&self) -> String {
        crate::render::inline_text(&self.nodes())
    }

    fn quick_dates_block(&self) -> SelectBlock {
        let mut options = Vec::with_capacity(self.quick_dates.len() + 1);
        options.push(OptionItem::placeholder(QUICK_DATES_LABEL));
        options.extend(
            self.quick_dates
                .iter()
                .map(|q| OptionItem::new(q.description())),
        );
        // selected points past the placeholder at the first entry matching
        // the current value, or at the placeholder itself
        let selected = self
            .quick_dates
            .iter()
            .position(|q| q.date() == self.value)
            .map_or(0, |i| i + 1);
        SelectBlock {
            kind: SelectKind::QuickDates,
            options,
            selected,
        }
    }
}
