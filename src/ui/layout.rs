use {
    super::renderer::{format_cell, format_count, format_revenue, format_top_artist, header_label},
    crate::{engine::ViewController, store::RecordField},
    ratatui::{
        layout::{Constraint, Direction, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph, Row, Table},
        Frame,
    },
};

/// Render the main UI layout
pub fn render_layout(
    f: &mut Frame,
    area: Rect,
    controller: &ViewController,
    max_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let chunks = RatLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Metric cards
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Stream table
            Constraint::Length(3), // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_metric_cards(f, chunks[1], controller);
    render_filter_bar(f, chunks[2], controller);
    render_streams_table(f, chunks[3], controller, max_rows)?;
    render_footer(f, chunks[4], controller);

    Ok(())
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Block::default().borders(Borders::ALL);

    let text = vec![Line::from(vec![
        Span::styled(
            "Streamify",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Analytics Dashboard"),
    ])];

    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_metric_cards(f: &mut Frame, area: Rect, controller: &ViewController) {
    let metrics = controller.metrics();

    let cards = [
        ("Total Users", format_count(metrics.total_users)),
        ("Active Users", format_count(metrics.active_users)),
        ("Total Streams", format_count(metrics.total_streams)),
        ("Revenue", format_revenue(metrics.revenue)),
        ("Top Artist", format_top_artist(metrics.top_artist.as_deref())),
    ];

    let columns = RatLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for ((title, value), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(card, *column);
    }
}

fn render_filter_bar(f: &mut Frame, area: Rect, controller: &ViewController) {
    let state = controller.filter_state();

    let text = vec![Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Yellow)),
        Span::raw(state.query.as_str()),
        Span::styled("▏", Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("Scope: ", Style::default().fg(Color::Yellow)),
        Span::raw(state.scope.label()),
        Span::styled(" (Tab)", Style::default().fg(Color::DarkGray)),
    ])];

    let block = Block::default().borders(Borders::ALL).title("Filter streams");
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn render_streams_table(
    f: &mut Frame,
    area: Rect,
    controller: &ViewController,
    max_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let sort = controller.sort_config();

    let header = Row::new(
        RecordField::TABLE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, field)| format!("F{} {}", i + 1, header_label(*field, &sort)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = controller
        .view()
        .into_iter()
        .take(max_rows)
        .map(|record| {
            Row::new(
                RecordField::TABLE_COLUMNS
                    .iter()
                    .map(|field| format_cell(record, *field))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = [
        Constraint::Length(20), // Song Name
        Constraint::Length(18), // Artist
        Constraint::Length(18), // Date Streamed
        Constraint::Length(18), // Stream Count
        Constraint::Length(14), // User ID
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Recent Streams"));

    f.render_widget(table, area);
    Ok(())
}

fn render_footer(f: &mut Frame, area: Rect, controller: &ViewController) {
    let text = vec![Line::from(vec![
        Span::styled("Showing: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{} of {}", controller.view_len(), controller.store().len())),
        Span::raw(" | "),
        Span::styled("Store: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("v{}", controller.store_version())),
        Span::raw(" | "),
        Span::raw("F1-F5 sort, Tab scope, F6 refresh, Esc quit"),
    ])];

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(text).block(footer), area);
}
