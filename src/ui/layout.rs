use {
    super::{
        renderer::{format_count, format_currency, format_share},
        terminal::DashboardApp,
    },
    crate::aggregator::Ranking,
    ratatui::{
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{BarChart, Block, Borders, Paragraph, Row, Table},
        Frame,
    },
};

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Header
            Constraint::Length(3),      // Metrics
            Constraint::Percentage(40), // Trend + customer cities
            Constraint::Min(8),         // Payments, statuses, seller cities
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_metrics(f, chunks[1], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_monthly_trend(f, middle[0], app);
    render_ranking(
        f,
        middle[1],
        "Customers per City (Top 10)",
        "Customers",
        &app.dashboard().customer_cities,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(chunks[3]);
    render_payment_mix(f, bottom[0], app);
    render_status_chart(f, bottom[1], app);
    render_ranking(
        f,
        bottom[2],
        "Sellers per City (Top 10)",
        "Sellers",
        &app.dashboard().seller_cities,
    );
}

fn render_header(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let range = app.state().range;
    let bounds = app
        .bounds()
        .map(|b| format!("data {} → {}", b.start, b.end))
        .unwrap_or_else(|| "no dated orders".to_string());

    let text = vec![
        Line::from(vec![
            Span::styled(
                "E-Commerce Dashboard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} → {}", range.start, range.end)),
            Span::styled(format!("  ({})", bounds), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![Span::raw(
            "[ ] start ±1 month   { } end ±1 month   r reset   q/Esc quit",
        )]),
    ];

    let header = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_metrics(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let dashboard = app.dashboard();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let metrics = [
        ("Total Orders", format_count(dashboard.total_orders)),
        ("Total Customers", format_count(dashboard.total_customers)),
        ("Total Revenue", format_currency(dashboard.total_revenue)),
        ("Avg Order Value", format_currency(dashboard.avg_order_value)),
    ];

    for ((title, value), cell) in metrics.into_iter().zip(cells.iter()) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(paragraph, *cell);
    }
}

fn render_monthly_trend(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let labels: Vec<String> = app
        .dashboard()
        .monthly_orders
        .iter()
        .map(|m| m.month.to_string())
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(app.dashboard().monthly_orders.iter())
        .map(|(label, m)| (label.as_str(), m.orders as u64))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Monthly Orders"))
        .data(data.as_slice())
        .bar_width(7)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::Black).bg(Color::Blue));

    f.render_widget(chart, area);
}

fn render_status_chart(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let data: Vec<(&str, u64)> = app
        .dashboard()
        .order_statuses
        .iter()
        .map(|(label, count)| (label.as_str(), *count as u64))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Order Status"))
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));

    f.render_widget(chart, area);
}

fn render_payment_mix(f: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let payments = &app.dashboard().payment_types;
    let total: usize = payments.iter().map(|(_, count)| count).sum();

    let header = Row::new(vec!["Method", "Count", "Share"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = payments
        .iter()
        .map(|(label, count)| {
            Row::new(vec![
                label.clone(),
                format_count(*count),
                format_share(*count, total),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Payment Methods"));

    f.render_widget(table, area);
}

fn render_ranking(f: &mut Frame, area: Rect, title: &str, unit: &str, ranking: &Ranking) {
    let header = Row::new(vec!["City".to_string(), unit.to_string()])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = ranking
        .iter()
        .map(|(city, count)| Row::new(vec![city.clone(), format_count(*count)]))
        .collect();

    let widths = [Constraint::Percentage(70), Constraint::Percentage(30)];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardState;
    use crate::filter::DateRange;
    use crate::store::NormalizedStore;
    use crate::test_support::{customer, date, item, order, payment, seller};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_layout_renders_metrics() {
        let store = NormalizedStore::from_parts(
            vec![order("1", "c1", "2017-01-05"), order("2", "c2", "2017-02-10")],
            vec![item("1", "s1", 1500.0), item("2", "s1", 20.0)],
            vec![customer("c1", "santos"), customer("c2", "recife")],
            vec![seller("s1", "curitiba")],
            vec![payment("1", "boleto", 1500.0), payment("2", "credit_card", 20.0)],
            vec![],
        );
        let bounds = DateRange::new(date("2017-01-05"), date("2017-02-10"));
        let app = DashboardApp::new(&store, DashboardState::new(bounds), Some(bounds));

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_layout(f, area, &app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Total Orders"));
        assert!(screen.contains("R$ 1,520.00"));
        assert!(screen.contains("curitiba"));
    }
}
