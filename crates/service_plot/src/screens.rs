//! Rendering of the path chart and its annotations.

use crate::visualisation::PathChartData;
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
};

/// Chart title.
pub const CHART_TITLE: &str = "Simulated Asset Price Paths";

/// Time axis title.
pub const X_AXIS_TITLE: &str = "Time to Expiration (Years)";

/// Price axis title.
pub const Y_AXIS_TITLE: &str = "Asset Price";

/// Path colours, cycled. Red is kept for the strike.
const PATH_COLORS: [Color; 10] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightCyan,
];

/// Draw the path chart on the left three quarters of `area` and the
/// parameter box and price estimates on the right quarter.
pub fn draw_path_chart(frame: &mut Frame, area: Rect, data: &PathChartData) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    draw_chart(frame, chunks[0], data);
    draw_annotations(frame, chunks[1], data);
}

fn draw_chart(frame: &mut Frame, area: Rect, data: &PathChartData) {
    let marker = [(data.x_bounds[1], data.parameters.strike)];

    let mut datasets: Vec<Dataset> = data
        .series
        .iter()
        .zip(PATH_COLORS.iter().cycle())
        .map(|(series, &color)| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(series)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(data.strike_label())
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&data.strike_line),
    );
    datasets.push(
        Dataset::default()
            .name("K")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&marker),
    );

    let x_labels: Vec<Span> = data.x_labels().into_iter().map(Span::raw).collect();
    let y_labels: Vec<Span> = data.y_labels().into_iter().map(Span::raw).collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", CHART_TITLE))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(X_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(data.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Y_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(data.y_bounds)
                .labels(y_labels),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

fn draw_annotations(frame: &mut Frame, area: Rect, data: &PathChartData) {
    let parameter_lines = data.parameter_lines();
    let box_height = parameter_lines.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(box_height),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let parameters = Paragraph::new(
        parameter_lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, bold)))
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(parameters, chunks[1]);

    let [call, put] = data.price_lines();
    let prices = Paragraph::new(vec![
        Line::from(Span::styled(call, bold.fg(Color::Green))),
        Line::from(Span::styled(put, bold.fg(Color::Red))),
    ]);
    frame.render_widget(prices, chunks[3]);
}
