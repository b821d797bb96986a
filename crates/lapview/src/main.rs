use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use lapview_core::charts::{AxisSide, ChartDef, YScale};
use lapview_core::theme::Rgb;
use lapview_core::timeutils::axis_label;
use lapview_core::{
    fetch_dashboard, refresh_dashboard, ApiClient, ChartId, ChartSeries, ChartUpdate, Config,
    DataRangeResponse, RangePreset, SampleStats, Theme, TimeRange, UiState, DASHBOARD_CHARTS,
};
use once_cell::sync::OnceCell;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Terminal;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "lapview: timelapse metrics dashboard")]
struct Args {
    /// Path to config TOML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override backend base URL
    #[arg(long)]
    url: Option<String>,
    /// Initial range, e.g. 6h or 7d
    #[arg(long)]
    range: Option<String>,
    /// Initial theme: light or dark
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,
    /// Fetch once and dump all series as CSV to stdout
    #[arg(long)]
    csv: bool,
}

/// Work handed to the fetch thread.
enum Job {
    Refresh { range: TimeRange, downsample: u32 },
}

/// Results streamed back to the UI thread.
enum UiMsg {
    Chart(ChartUpdate),
    RefreshDone,
    DataRange(DataRangeResponse),
}

#[derive(Debug, Default)]
struct ChartState {
    series: Vec<ChartSeries>,
    loading: bool,
    stats: SampleStats,
}

struct App {
    theme: Theme,
    preset: RangePreset,
    custom_range: Option<TimeRange>,
    downsample: u32,
    refresh_interval: Duration,
    charts: HashMap<ChartId, ChartState>,
    last_range: TimeRange,
    in_flight: bool,
    failed_charts: usize,
    auto_refresh: Option<Instant>,
    data_range: Option<DataRangeResponse>,
    input: String,
    input_mode: bool,
    status: String,
    state_path: Option<PathBuf>,
    jobs: Sender<Job>,
}

/// Startup precedence for the range preset: an explicit `--range` beats the
/// persisted selection, which beats the configured default.
fn initial_preset(saved: Option<UiState>, config: &Config, args: &Args) -> RangePreset {
    if let Some(range) = &args.range {
        return RangePreset::from_key(range);
    }
    match saved {
        Some(state) => state.preset(),
        None => RangePreset::from_key(&config.viewer.default_range),
    }
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    match s {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        _ => Err(format!("unknown theme: {s} (expected light or dark)")),
    }
}

impl App {
    fn new(config: &Config, args: &Args, jobs: Sender<Job>) -> Self {
        let state_path = UiState::default_path().ok();
        let saved = state_path.as_deref().and_then(UiState::load);
        let preset = initial_preset(saved, config, args);
        let theme = args.theme.unwrap_or(config.viewer.theme);

        let mut charts = HashMap::new();
        for chart in &DASHBOARD_CHARTS {
            charts.insert(chart.id, ChartState::default());
        }

        Self {
            theme,
            preset,
            custom_range: None,
            downsample: config.api.downsample,
            refresh_interval: config.refresh.interval,
            charts,
            last_range: preset.resolve(),
            in_flight: false,
            failed_charts: 0,
            auto_refresh: None,
            data_range: None,
            input: String::new(),
            input_mode: false,
            status: String::from(
                "1-6 range | e custom | r refresh | a auto | t theme | c csv | q quit",
            ),
            state_path,
            jobs,
        }
    }

    /// The range for the next refresh: an explicit custom range overrides
    /// the preset entirely.
    fn resolve_range(&self) -> TimeRange {
        match self.custom_range {
            Some(range) => range,
            None => self.preset.resolve(),
        }
    }

    /// Kick off a full dashboard refresh. Triggers arriving while one is
    /// pending are dropped, not queued.
    fn request_refresh(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.failed_charts = 0;
        let range = self.resolve_range();
        self.last_range = range;
        for state in self.charts.values_mut() {
            state.loading = true;
        }
        if self
            .jobs
            .send(Job::Refresh {
                range,
                downsample: self.downsample,
            })
            .is_err()
        {
            self.in_flight = false;
            self.status = "fetch worker is gone".into();
            return false;
        }
        true
    }

    fn apply_update(&mut self, update: ChartUpdate) {
        let state = self.charts.entry(update.id()).or_default();
        match update {
            ChartUpdate::Loaded { series, stats, .. } => {
                state.series = series;
                state.stats = stats;
                state.loading = false;
            }
            ChartUpdate::Failed { .. } => {
                // Keep whatever was rendered before.
                state.loading = false;
                self.failed_charts += 1;
            }
        }
    }

    fn drain_updates(&mut self, rx: &Receiver<UiMsg>) {
        while let Ok(msg) = rx.try_recv() {
            match msg {
                UiMsg::Chart(update) => self.apply_update(update),
                UiMsg::RefreshDone => {
                    self.in_flight = false;
                    self.status = if self.failed_charts > 0 {
                        format!("refreshed with {} chart(s) failing", self.failed_charts)
                    } else {
                        format!("refreshed {}", self.range_label())
                    };
                }
                UiMsg::DataRange(range) => self.data_range = Some(range),
            }
        }
    }

    fn select_preset(&mut self, index: usize) {
        let Some(&preset) = RangePreset::ALL.get(index) else {
            return;
        };
        self.preset = preset;
        self.custom_range = None;
        if let Some(path) = &self.state_path {
            let state = UiState {
                range: preset.key().to_string(),
            };
            if let Err(err) = state.save(path) {
                warn!("failed to persist range preset: {err}");
            }
        }
        self.request_refresh();
    }

    fn apply_custom_input(&mut self) {
        let mut parts = self.input.split_whitespace();
        let (start, end) = (
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        );
        match TimeRange::from_inputs(start, end) {
            Ok(range) => {
                self.custom_range = Some(range);
                self.status = format!("custom range {}", self.range_label());
                self.request_refresh();
            }
            Err(err) => {
                self.status = format!("invalid range: {err}");
            }
        }
    }

    fn toggle_auto_refresh(&mut self, now: Instant) {
        if self.auto_refresh.is_some() {
            self.auto_refresh = None;
            self.status = "auto-refresh off".into();
        } else {
            self.auto_refresh = Some(now + self.refresh_interval);
            self.status = format!(
                "auto-refresh every {}",
                humantime::format_duration(self.refresh_interval)
            );
        }
    }

    /// Fire and re-arm the periodic trigger when its deadline has passed.
    fn auto_refresh_tick(&mut self, now: Instant) {
        if let Some(deadline) = self.auto_refresh {
            if now >= deadline {
                self.auto_refresh = Some(now + self.refresh_interval);
                self.request_refresh();
            }
        }
    }

    fn range_label(&self) -> String {
        match self.custom_range {
            Some(range) => format!(
                "{} .. {}",
                lapview_core::timeutils::format_rfc3339(range.start),
                lapview_core::timeutils::format_rfc3339(range.end)
            ),
            None => self.preset.key().to_string(),
        }
    }

    fn export_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut writer);
        csv_writer.write_record(["chart", "metric", "timestamp", "value"])?;
        for chart in &DASHBOARD_CHARTS {
            let Some(state) = self.charts.get(&chart.id) else {
                continue;
            };
            for series in &state.series {
                for &(x, y) in &series.points {
                    let timestamp = (x as i64).to_string();
                    let value = format!("{y:.3}");
                    csv_writer.write_record([
                        chart.id.slug(),
                        series.metric.as_str(),
                        timestamp.as_str(),
                        value.as_str(),
                    ])?;
                }
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Min/max over a point set's y values.
fn y_bounds(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut iter = points.iter().map(|&(_, y)| y);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some((min, max))
}

/// Linearly remap `value` from one interval into another. Used to plot
/// right-axis series on the shared y axis; legend shows the raw values.
fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    if (from.1 - from.0).abs() < f64::EPSILON {
        return (to.0 + to.1) / 2.0;
    }
    to.0 + (value - from.0) / (from.1 - from.0) * (to.1 - to.0)
}

fn scale_point(y: f64, scale: YScale) -> f64 {
    match scale {
        YScale::Linear => y,
        YScale::Log10 => y.max(f64::MIN_POSITIVE).log10(),
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Resolve the plotted y interval for the chart's left axis.
fn left_axis_bounds(chart: &ChartDef, plotted: &[(f64, f64)]) -> (f64, f64) {
    let scale = chart.left.scale;
    let data = y_bounds(plotted);
    let min = chart
        .left
        .min
        .map(|m| scale_point(m, scale))
        .or(data.map(|(lo, _)| lo))
        .unwrap_or(0.0);
    let max = chart
        .left
        .max
        .map(|m| scale_point(m, scale))
        .or(data.map(|(_, hi)| hi))
        .unwrap_or(1.0);
    if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn axis_value_label(value: f64, scale: YScale) -> String {
    let raw = match scale {
        YScale::Linear => value,
        YScale::Log10 => 10f64.powf(value),
    };
    if raw.abs() >= 1000.0 {
        format!("{:.0}", raw)
    } else if raw.abs() >= 1.0 {
        format!("{:.1}", raw)
    } else {
        format!("{:.2}", raw)
    }
}

fn render_chart(frame: &mut ratatui::Frame<'_>, area: Rect, app: &App, chart: &ChartDef) {
    let palette = app.theme.palette();
    let state = app.charts.get(&chart.id);
    let empty: Vec<ChartSeries> = Vec::new();
    let series = state.map(|s| &s.series).unwrap_or(&empty);

    // Left-axis data goes through the axis scale; right-axis data is
    // remapped into the left bounds after both sides are known.
    let mut left_points: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut right_raw: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut legend = Vec::new();
    for def in chart.metrics {
        let points = series
            .iter()
            .find(|s| s.metric == def.metric)
            .map(|s| s.points.clone())
            .unwrap_or_default();
        if let Some(latest) = points.last().map(|&(_, y)| y) {
            legend.push(format!("{} {:.1}{}", def.label, latest, def.unit));
        }
        match def.axis {
            AxisSide::Left => left_points.push(
                points
                    .iter()
                    .map(|&(x, y)| (x, scale_point(y, chart.left.scale)))
                    .collect(),
            ),
            AxisSide::Right => right_raw.push(points),
        }
    }

    let all_left: Vec<(f64, f64)> = left_points.iter().flatten().copied().collect();
    let bounds = left_axis_bounds(chart, &all_left);

    let right_bounds = chart.right.and_then(|axis| {
        let all: Vec<(f64, f64)> = right_raw.iter().flatten().copied().collect();
        let data = y_bounds(&all)?;
        Some((axis.min.unwrap_or(data.0), axis.max.unwrap_or(data.1)))
    });
    let right_points: Vec<Vec<(f64, f64)>> = right_raw
        .iter()
        .map(|points| match right_bounds {
            Some(from) => points
                .iter()
                .map(|&(x, y)| (x, remap(y, from, bounds)))
                .collect(),
            None => Vec::new(),
        })
        .collect();

    let mut datasets = Vec::new();
    let mut left_iter = left_points.iter();
    let mut right_iter = right_points.iter();
    for def in chart.metrics {
        let data = match def.axis {
            AxisSide::Left => left_iter.next(),
            AxisSide::Right => right_iter.next(),
        };
        let Some(data) = data else { continue };
        let color = if def.band {
            palette.band(def.metric)
        } else {
            palette.metric(def.metric)
        };
        datasets.push(
            Dataset::default()
                .name(def.label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(to_color(color)))
                .data(data),
        );
    }

    let range = app.last_range;
    let x_bounds = [
        range.start.unix_timestamp() as f64,
        range.end.unix_timestamp() as f64,
    ];
    let span = range.span();
    let mid = range.start + span / 2;
    let text_style = Style::default().fg(to_color(palette.text));
    let x_labels = vec![
        Span::styled(axis_label(range.start, span), text_style),
        Span::styled(axis_label(mid, span), text_style),
        Span::styled(axis_label(range.end, span), text_style),
    ];
    let y_labels = vec![
        Span::styled(axis_value_label(bounds.0, chart.left.scale), text_style),
        Span::styled(
            axis_value_label((bounds.0 + bounds.1) / 2.0, chart.left.scale),
            text_style,
        ),
        Span::styled(axis_value_label(bounds.1, chart.left.scale), text_style),
    ];

    let loading = state.map(|s| s.loading).unwrap_or(false);
    let mut title = chart.title.to_string();
    if loading {
        title.push_str(" [loading]");
    } else if !legend.is_empty() {
        title = format!("{} | {}", title, legend.join("  "));
    }

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(to_color(palette.grid))),
        )
        .x_axis(
            Axis::default()
                .bounds(x_bounds)
                .labels(x_labels)
                .style(Style::default().fg(to_color(palette.grid))),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(chart.left.title, text_style))
                .bounds([bounds.0, bounds.1])
                .labels(y_labels)
                .style(Style::default().fg(to_color(palette.grid))),
        );
    frame.render_widget(widget, area);
}

fn draw_ui(frame: &mut ratatui::Frame<'_>, app: &App) {
    let palette = app.theme.palette();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let availability = match &app.data_range {
        Some(range) => format!(
            "{} samples ({} .. {})",
            range.count,
            range.earliest.as_deref().unwrap_or("?"),
            range.latest.as_deref().unwrap_or("?")
        ),
        None => "backend range unknown".into(),
    };
    let auto = if app.auto_refresh.is_some() {
        "on"
    } else {
        "off"
    };
    let header_text = format!(
        "Range: {} | Auto: {} | Theme: {:?} | {}",
        app.range_label(),
        auto,
        app.theme,
        availability
    );
    let header = Paragraph::new(header_text)
        .style(Style::default().fg(to_color(palette.text)))
        .block(Block::default().borders(Borders::ALL).title("lapview"));
    frame.render_widget(header, chunks[0]);

    // Five charts: two rows of two, one full-width row.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let areas = [top[0], top[1], middle[0], middle[1], rows[2]];
    for (chart, area) in DASHBOARD_CHARTS.iter().zip(areas) {
        render_chart(frame, area, app, chart);
    }

    let footer_text = if app.input_mode {
        format!("custom range (start end, RFC3339): {}", app.input)
    } else {
        let stats: usize = app.charts.values().map(|s| s.stats.point_count).sum();
        let original: usize = app.charts.values().map(|s| s.stats.original_count).sum();
        format!(
            "{} | showing {} points (downsampled from {})",
            app.status, stats, original
        )
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(to_color(palette.text)))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(footer, chunks[2]);
}

fn run_worker(config: Config, jobs: Receiver<Job>, ui: Sender<UiMsg>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("starting fetch runtime")?;
    let client = Arc::new(ApiClient::new(&config.api).context("building API client")?);

    // One-off probe for what the backend holds, shown in the header.
    {
        let client = Arc::clone(&client);
        let ui = ui.clone();
        runtime.spawn(async move {
            match client.fetch_data_range().await {
                Ok(range) => {
                    let _ = ui.send(UiMsg::DataRange(range));
                }
                Err(err) => warn!("data range probe failed: {err}"),
            }
        });
    }

    while let Ok(Job::Refresh { range, downsample }) = jobs.recv() {
        let (tx, rx) = mpsc::channel();
        let handle = runtime.spawn(refresh_dashboard(
            Arc::clone(&client),
            range,
            downsample,
            tx,
        ));
        // Forward per-chart updates as they complete; the iterator ends when
        // the last fetch task drops its sender.
        for update in rx {
            if ui.send(UiMsg::Chart(update)).is_err() {
                break;
            }
        }
        if let Err(err) = runtime.block_on(handle) {
            warn!("refresh task failed: {err}");
        }
        if ui.send(UiMsg::RefreshDone).is_err() {
            break;
        }
    }
    Ok(())
}

fn run_tui(mut app: App, ui_rx: Receiver<UiMsg>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let tick_rate = Duration::from_millis(250);
    app.request_refresh();

    loop {
        app.drain_updates(&ui_rx);
        terminal.draw(|f| draw_ui(f, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.input_mode {
                        match key.code {
                            KeyCode::Enter => {
                                app.input_mode = false;
                                app.apply_custom_input();
                            }
                            KeyCode::Esc => {
                                app.input_mode = false;
                                app.input.clear();
                            }
                            KeyCode::Char(c) => app.input.push(c),
                            KeyCode::Backspace => {
                                app.input.pop();
                            }
                            _ => {}
                        }
                        continue;
                    }

                    match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char(c @ '1'..='6') => {
                            app.select_preset(c as usize - '1' as usize);
                        }
                        KeyCode::Char('e') => {
                            app.input_mode = true;
                            app.input.clear();
                            app.status = "type start and end, Enter to apply".into();
                        }
                        KeyCode::Char('r') => {
                            if !app.request_refresh() {
                                app.status = "refresh already in flight".into();
                            }
                        }
                        KeyCode::Char('a') => app.toggle_auto_refresh(Instant::now()),
                        KeyCode::Char('t') => {
                            app.theme = app.theme.toggle();
                        }
                        KeyCode::Char('c') => {
                            let path = "lapview-export.csv";
                            match std::fs::File::create(path) {
                                Ok(file) => {
                                    if let Err(err) = app.export_csv(file) {
                                        app.status = format!("csv export failed: {err}");
                                    } else {
                                        app.status = format!("csv exported to {path}");
                                    }
                                }
                                Err(_) => app.status = "unable to write csv".into(),
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        app.auto_refresh_tick(Instant::now());
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn init_logging(config: &Config, to_stderr: bool) -> Result<()> {
    let writer: BoxMakeWriter = match (&config.logging.file, to_stderr) {
        (Some(path), false) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file at {:?}", path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            static LOG_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> =
                OnceCell::new();
            let _ = LOG_GUARD.set(guard);
            BoxMakeWriter::new(writer)
        }
        _ => BoxMakeWriter::new(std::io::stderr),
    };

    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
        .try_init()
        .ok();
    Ok(())
}

/// Range for the one-shot export: `--range` must parse, otherwise the
/// configured default window ending now.
fn csv_range(spec: Option<&str>, config: &Config) -> Result<TimeRange> {
    match spec {
        Some(spec) => Ok(TimeRange::ending_now(
            lapview_core::parse_range(spec).with_context(|| format!("invalid --range {spec:?}"))?,
        )),
        None => Ok(RangePreset::from_key(&config.viewer.default_range).resolve()),
    }
}

fn csv_once(config: &Config, range: TimeRange) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("starting fetch runtime")?;
    let client = Arc::new(ApiClient::new(&config.api).context("building API client")?);
    let updates = runtime.block_on(fetch_dashboard(client, range, config.api.downsample));

    let stdout = io::stdout();
    let mut csv_writer = csv::Writer::from_writer(stdout.lock());
    csv_writer.write_record(["chart", "metric", "timestamp", "value"])?;
    for update in updates {
        let ChartUpdate::Loaded { id, series, .. } = update else {
            continue;
        };
        for s in &series {
            for &(x, y) in &s.points {
                let timestamp = (x as i64).to_string();
                let value = format!("{y:.3}");
                csv_writer.write_record([
                    id.slug(),
                    s.metric.as_str(),
                    timestamp.as_str(),
                    value.as_str(),
                ])?;
            }
        }
    }
    csv_writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = &args.url {
        config.api.base_url = url.clone();
    }
    init_logging(&config, args.csv)?;
    info!("starting lapview");

    if args.csv {
        return csv_once(&config, csv_range(args.range.as_deref(), &config)?);
    }

    let (jobs_tx, jobs_rx) = mpsc::channel();
    let (ui_tx, ui_rx) = mpsc::channel();
    let worker_config = config.clone();
    std::thread::spawn(move || {
        if let Err(err) = run_worker(worker_config, jobs_rx, ui_tx) {
            warn!("fetch worker exited: {err}");
        }
    });

    let app = App::new(&config, &args, jobs_tx);
    run_tui(app, ui_rx)
}
