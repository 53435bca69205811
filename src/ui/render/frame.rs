use ratatui::{
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::model::UiRenderData;

use super::formatting::format_percent_x100;
use super::spinner::spinner_symbol;
use super::theme::{
    ACCENT_PINK, FAIL_RGB, LABEL_INDENT, RATE_RGB, SUCCESS_RGB, number_style, rgb, style_color,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    let body = Paragraph::new(dashboard_lines(data)).wrap(Wrap { trim: false });
    f.render_widget(body, size);
}

/// Text of the dashboard, one entry per terminal row.
#[must_use]
pub fn dashboard_lines(data: &UiRenderData) -> Vec<Line<'static>> {
    let snapshot = &data.snapshot;
    let no_color = data.no_color;

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                spinner_symbol(data.spinner_frame),
                style_color(no_color, ACCENT_PINK),
            ),
            Span::raw(" "),
            Span::raw(data.target_url.clone()),
        ]),
        metric_line(
            "Current rate: ",
            snapshot.displayed_rate.to_string(),
            " req/s",
            number_style(no_color, rgb(RATE_RGB)),
        ),
        metric_line(
            "Time passed: ",
            snapshot.elapsed_seconds.to_string(),
            " s",
            number_style(no_color, rgb(RATE_RGB)),
        ),
        metric_line(
            "Total successes: ",
            snapshot.total_successes.to_string(),
            "",
            number_style(no_color, rgb(SUCCESS_RGB)),
        ),
        metric_line(
            "Total fails: ",
            snapshot.total_failures.to_string(),
            "",
            number_style(no_color, rgb(FAIL_RGB)),
        ),
        metric_line(
            "Success rate (%): ",
            format_percent_x100(snapshot.success_rate_x100()),
            "",
            number_style(no_color, rgb(SUCCESS_RGB)),
        ),
        Line::from(""),
        Line::from("Press q to quit."),
    ]
}

fn metric_line(
    label: &'static str,
    value: String,
    unit: &'static str,
    value_style: ratatui::style::Style,
) -> Line<'static> {
    Line::from(vec![
        Span::raw(LABEL_INDENT),
        Span::raw(label),
        Span::styled(value, value_style),
        Span::raw(unit),
    ])
}
