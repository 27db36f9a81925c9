//! Plain-text rendering of search traces and solutions.
//!
//! [`render_table`] lays out one row per [`IterationRecord`]. Every table
//! starts with the shared columns `k`, `low`, `high`, `length`; the
//! strategy-specific columns follow in a fixed order and appear only when a
//! record needs them:
//!
//! | column   | shown for                          |
//! |----------|------------------------------------|
//! | `mid`    | dichotomous                        |
//! | `i`      | Fibonacci (the Fibonacci index)    |
//! | `x1` .. `f(x2)` | every strategy              |
//! | `new`    | golden section and Fibonacci       |
//!
//! The column set therefore tells which strategy produced a trace. In a
//! mixed slice, cells of columns a record does not use are left blank.


use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};

use extremum_solvers::{Detail, Evaluated, IterationRecord, Solution};

/// Optional column groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    mid: bool,
    index: bool,
    new: bool,
}

impl Layout {
    fn of(records: &[IterationRecord]) -> Self {
        let mut layout = Self {
            mid: false,
            index: false,
            new: false,
        };
        for record in records {
            match record.detail {
                Detail::Dichotomous { .. } => layout.mid = true,
                Detail::GoldenSection { .. } => layout.new = true,
                Detail::Fibonacci { .. } => {
                    layout.index = true;
                    layout.new = true;
                }
            }
        }
        layout
    }

    fn header(self) -> Vec<String> {
        let mut header = vec!["k", "low", "high", "length"];
        if self.mid {
            header.push("mid");
        }
        if self.index {
            header.push("i");
        }
        header.extend(["x1", "x2", "f(x1)", "f(x2)"]);
        if self.new {
            header.push("new");
        }
        header.into_iter().map(str::to_owned).collect()
    }

    fn row(self, record: &IterationRecord) -> Vec<String> {
        let [left, right] = record.probes();
        let mut row = vec![
            record.iter.to_string(),
            format_number(record.low),
            format_number(record.high),
            format_number(record.length()),
        ];

        let (mid, index, new) = match record.detail {
            Detail::Dichotomous { mid, .. } => (Some(mid), None, None),
            Detail::GoldenSection { evaluated, .. } => (None, None, Some(new_cell(evaluated, false))),
            Detail::Fibonacci {
                index,
                evaluated,
                perturbed,
                ..
            } => (None, Some(index), Some(new_cell(evaluated, perturbed))),
        };

        if self.mid {
            row.push(mid.map(format_number).unwrap_or_default());
        }
        if self.index {
            row.push(index.map(|i| i.to_string()).unwrap_or_default());
        }
        row.extend([
            format_number(left.x),
            format_number(right.x),
            format_number(left.value),
            format_number(right.value),
        ]);
        if self.new {
            row.push(new.unwrap_or_default());
        }
        row
    }
}

/// Describes which points an iteration evaluated.
fn new_cell(evaluated: Evaluated, perturbed: bool) -> String {
    let cell = match evaluated {
        Evaluated::Left => "x1",
        Evaluated::Right => "x2",
        Evaluated::Both => "both",
    };
    if perturbed {
        format!("{cell} (x2=x1+ε)")
    } else {
        cell.to_owned()
    }
}

/// Renders iteration records as a table.
///
/// The output depends only on the records: rendering the same slice twice
/// yields identical text. An empty slice renders a header-only table with
/// the shared columns.
#[must_use]
pub fn render_table(records: &[IterationRecord]) -> String {
    let layout = Layout::of(records);

    let mut builder = Builder::default();
    builder.push_record(layout.header());
    for record in records {
        builder.push_record(layout.row(record));
    }

    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Returns the column headers [`render_table`] uses for `records`.
#[must_use]
pub fn table_columns(records: &[IterationRecord]) -> Vec<String> {
    Layout::of(records).header()
}

#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryRow {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Renders the outcome of a search as a two-column table.
#[must_use]
pub fn render_summary(solution: &Solution) -> String {
    let [low, high] = solution.interval;
    let rows = [
        SummaryRow::new("strategy", solution.strategy.name()),
        SummaryRow::new("direction", solution.direction.as_str()),
        SummaryRow::new("status", format!("{:?}", solution.status)),
        SummaryRow::new("iterations", solution.iters().to_string()),
        SummaryRow::new("evaluations", solution.evaluations.to_string()),
        SummaryRow::new(
            "final interval",
            format!("[{}, {}]", format_number(low), format_number(high)),
        ),
        SummaryRow::new("interval length", format_number(solution.interval_length())),
        SummaryRow::new("best x", format_number(solution.best.x)),
        SummaryRow::new("best f(x)", format_number(solution.best.value)),
    ];

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// Formats a number with 8 significant digits in the style of C's `%.8g`.
///
/// Fixed notation is used for decimal exponents in `-4..8` and scientific
/// notation otherwise. Trailing zeros are dropped.
///
/// ```
/// use extremum_observers::format_number;
///
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(2.0 / 3.0), "0.66666667");
/// assert_eq!(format_number(123_456_789.0), "1.2345679e+08");
/// assert_eq!(format_number(1e-5), "1e-05");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let scientific = format!("{value:.7e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return scientific;
    };

    if (-4..8).contains(&exp) {
        let decimals = usize::try_from(7 - exp).unwrap_or_default();
        trim_fraction(&format!("{value:.decimals$}"))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(digits: &str) -> String {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        digits.to_owned()
    }
}
