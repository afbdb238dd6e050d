use crate::application::{App, AppMode, NAV_ROUTES, ProfileField, Route, View};
use crate::domain::{
    AuthField, DashboardStats, FormMode, Intensity, Theme, WEEKLY_ACTIVITY, WEIGHT_TREND, Workout,
    WorkoutInsights,
};
use chrono::{DateTime, Local, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Clear, Dataset, Gauge, GraphType, Paragraph,
        Row, Table, Wrap,
    },
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
struct Palette {
    base: Style,
    accent: Color,
    muted: Color,
    selected: Style,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default(),
                accent: Color::Blue,
                muted: Color::DarkGray,
                selected: Style::default().bg(Color::LightBlue).fg(Color::Black),
                error: Color::Red,
            },
            Theme::Dark => Self {
                base: Style::default().bg(Color::Black).fg(Color::White),
                accent: Color::LightGreen,
                muted: Color::Gray,
                selected: Style::default().bg(Color::Green).fg(Color::Black),
                error: Color::LightRed,
            },
        }
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    f.render_widget(Block::default().style(palette.base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);

    if app.route == Route::Auth {
        render_auth(f, app, &palette, chunks[1]);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(chunks[1]);
        render_sidebar(f, app, &palette, body[0]);
        render_content(f, app, &palette, body[1]);
    }

    render_status_bar(f, app, &palette, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_popup(f, &palette, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let user = app.user().map(|user| user.name.as_str()).unwrap_or("signed out");
    let header = Paragraph::new(format!("FitTrack Pro | {} | {}", app.route.label(), user))
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let lines: Vec<Line> = NAV_ROUTES
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let active = *route == app.route
                || (matches!(app.route, Route::WorkoutDetail(_)) && *route == Route::Dashboard);
            let style = if active { palette.selected } else { Style::default() };
            Line::styled(format!(" {} {}", index + 1, route.label()), style)
        })
        .collect();

    let nav = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(nav, area);
}

fn render_content(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match app.view() {
        View::Auth => render_auth(f, app, palette, area),
        View::Dashboard => render_dashboard(f, app, palette, area),
        View::WorkoutDetail(workout) => render_workout_detail(f, workout, palette, area),
        View::WorkoutNotFound(id) => render_workout_not_found(f, id, palette, area),
        View::Analytics => render_analytics(f, palette, area),
        View::Profile => render_profile(f, app, palette, area),
        View::Notifications => render_notifications(f, app, palette, area),
        View::Integrations => render_integrations(f, app, palette, area),
    }
}

fn render_auth(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let screen = &app.auth;
    let (title, subtitle) = match screen.form.mode {
        FormMode::Login => ("Welcome Back", "Sign in to continue your fitness journey"),
        FormMode::Register => ("Create Account", "Start your fitness journey today"),
    };

    let mut lines = vec![
        Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(subtitle, Style::default().fg(palette.muted)),
        Line::default(),
    ];

    if let Some(error) = &screen.general_error {
        lines.push(Line::styled(format!("! {error}"), Style::default().fg(palette.error)));
        lines.push(Line::default());
    }

    let focused = screen.focused_field();
    for &field in AuthField::fields_for(screen.form.mode) {
        let value = screen.form.field(field);
        let shown = if field.is_secret() { "*".repeat(value.chars().count()) } else { value.to_string() };
        let marker = if field == focused { ">" } else { " " };
        let style = if field == focused { palette.selected } else { Style::default() };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} {:<18}", field.label())),
            Span::styled(format!("{shown}_"), style),
        ]));
        if let Some(message) = screen.errors.get(field) {
            lines.push(Line::styled(format!("    {message}"), Style::default().fg(palette.error)));
        }
    }

    lines.push(Line::default());
    let hint = match screen.form.mode {
        FormMode::Login => "Tip: Use password 'password' to login. Ctrl+R: register here",
        FormMode::Register => "Ctrl+R: already have an account? Login here",
    };
    lines.push(Line::styled(hint, Style::default().fg(palette.muted)));

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("FitTrack Pro"))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

fn render_dashboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let now = Utc::now();
    let (upcoming, past) = app.partitioned(now);
    let stats = DashboardStats::from_partition(&upcoming, &past);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(table_height(upcoming.len())),
            Constraint::Min(0),
        ])
        .split(area);

    let name = app.user().map(|user| user.name.as_str()).unwrap_or("Friend");
    let greeting = Paragraph::new(vec![
        Line::styled(format!("Hello, {name}!"), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("Log a workout or tick off today's plan.", Style::default().fg(palette.muted)),
    ]);
    f.render_widget(greeting, chunks[0]);

    render_stats(f, &stats, palette, chunks[1]);

    render_workout_table(
        f,
        &format!("Upcoming Tasks ({} tasks)", upcoming.len()),
        &upcoming,
        app.selected,
        true,
        "No upcoming tasks. You're all caught up!",
        palette,
        chunks[2],
    );
    render_workout_table(
        f,
        "Recent History",
        &past,
        app.selected.wrapping_sub(upcoming.len()),
        false,
        "No completed activities yet.",
        palette,
        chunks[3],
    );
}

/// Rows for a bordered table with a minimum of one body line.
fn table_height(rows: usize) -> u16 {
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX).saturating_add(3)
}

fn render_stats(f: &mut Frame, stats: &DashboardStats, palette: &Palette, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let entries = [
        ("Calories", stats.calories_burned.to_string()),
        ("Goals", stats.goals_label()),
        ("Upcoming", stats.upcoming.to_string()),
        ("Active", stats.active_time_label()),
    ];

    for ((label, value), cell) in entries.into_iter().zip(cells.iter()) {
        let widget = Paragraph::new(Line::styled(value, Style::default().fg(palette.accent)))
            .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(widget, *cell);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_workout_table(
    f: &mut Frame,
    title: &str,
    workouts: &[Arc<Workout>],
    selected: usize,
    upcoming: bool,
    empty_message: &str,
    palette: &Palette,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    if workouts.is_empty() {
        let empty = Paragraph::new(Line::styled(empty_message, Style::default().fg(palette.muted)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = workouts
        .iter()
        .enumerate()
        .map(|(index, workout)| {
            let check = if workout.is_completed() { "[x]" } else { "[ ]" };
            let when = format_when(workout.date, upcoming);
            let intensity = workout.intensity.map(|i| i.to_string()).unwrap_or_default();
            let style = if index == selected { palette.selected } else { Style::default() };
            Row::new(vec![
                Cell::from(check),
                Cell::from(workout.title.clone()),
                Cell::from(workout.kind.to_string()),
                Cell::from(when),
                Cell::from(format!("{} min", workout.duration)),
                Cell::from(intensity).style(Style::default().fg(intensity_color(workout.intensity))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(16),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths).block(block).column_spacing(1);
    f.render_widget(table, area);
}

fn format_when(date: DateTime<Utc>, upcoming: bool) -> String {
    let local = date.with_timezone(&Local);
    if upcoming {
        local.format("%a %H:%M").to_string()
    } else {
        local.format("%b %d").to_string()
    }
}

fn intensity_color(intensity: Option<Intensity>) -> Color {
    match intensity {
        Some(Intensity::High) => Color::Red,
        Some(Intensity::Moderate) => Color::Yellow,
        Some(Intensity::Low) | None => Color::Green,
    }
}

fn render_workout_detail(f: &mut Frame, workout: &Workout, palette: &Palette, area: Rect) {
    let insights = WorkoutInsights::for_workout(workout);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::styled(workout.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(
            format!("{} | {}", workout.kind, workout.date.with_timezone(&Local).format("%A, %B %d %Y %H:%M")),
            Style::default().fg(palette.muted),
        ),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let mut stats = vec![
        ("Duration", format!("{} min", workout.duration)),
        ("Calories", workout.calories.to_string()),
    ];
    if let Some(distance) = workout.distance {
        stats.push(("Distance", format!("{distance} km")));
    }
    if let Some(heart_rate) = workout.heart_rate {
        stats.push(("Heart Rate", format!("{heart_rate} bpm")));
    }
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(chunks[1]);
    for ((label, value), cell) in stats.into_iter().zip(cells.iter()) {
        let widget = Paragraph::new(Line::styled(value, Style::default().fg(palette.accent)))
            .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(widget, *cell);
    }

    let intensity = workout.intensity.map(|i| i.to_string()).unwrap_or_else(|| "Low".to_string());
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Workout Intensity"))
        .gauge_style(Style::default().fg(intensity_color(workout.intensity)))
        .ratio(insights.intensity_level)
        .label(intensity);
    f.render_widget(gauge, chunks[2]);

    let mut lines = vec![
        Line::styled("Description", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(
            workout
                .description
                .clone()
                .unwrap_or_else(|| "No description provided for this workout.".to_string()),
        ),
        Line::default(),
        Line::styled("Additional Details", Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(pace) = insights.pace {
        lines.push(Line::raw(format!("Average Pace   {pace} min/km")));
    }
    lines.push(Line::raw(format!("Workout Type   {}", workout.kind)));
    lines.push(Line::raw(format!("Status         {}", insights.status)));

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[3]);
}

fn render_workout_not_found(f: &mut Frame, id: &str, palette: &Palette, area: Rect) {
    let message = Paragraph::new(vec![
        Line::styled("Workout not found", Style::default().fg(palette.error).add_modifier(Modifier::BOLD)),
        Line::raw(format!("No workout with id \"{id}\" exists.")),
        Line::default(),
        Line::styled("Press b to go back to the dashboard", Style::default().fg(palette.muted)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Workout"));
    f.render_widget(message, area);
}

fn render_analytics(f: &mut Frame, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let calories: Vec<(&str, u64)> = WEEKLY_ACTIVITY.iter().map(|day| (day.day, day.calories)).collect();
    let bars = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Weekly Activity (calories)"))
        .data(calories.as_slice())
        .bar_width(6)
        .bar_gap(2)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(Style::default().fg(Color::Black).bg(palette.accent));
    f.render_widget(bars, chunks[0]);

    let points: Vec<(f64, f64)> = WEIGHT_TREND
        .iter()
        .enumerate()
        .map(|(index, entry)| (index as f64, entry.weight))
        .collect();
    let (min, max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), (_, weight)| (lo.min(*weight), hi.max(*weight)));

    let dataset = Dataset::default()
        .name("Weight (kg)")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.accent))
        .data(&points);
    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title("Weight Progress"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len() - 1) as f64])
                .labels(vec![
                    Span::raw(WEIGHT_TREND[0].week),
                    Span::raw(WEIGHT_TREND[WEIGHT_TREND.len() - 1].week),
                ]),
        )
        .y_axis(
            Axis::default()
                .bounds([min.floor() - 1.0, max.ceil() + 1.0])
                .labels(vec![Span::raw(format!("{:.0}", min.floor())), Span::raw(format!("{:.0}", max.ceil()))]),
        );
    f.render_widget(chart, chunks[1]);
}

fn render_profile(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(user) = app.user() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(user.email.clone(), Style::default().fg(palette.muted)),
    ])
    .block(Block::default().borders(Borders::ALL).title(format!("@{}", user.username)));
    f.render_widget(header, chunks[0]);

    let rows: Vec<Row> = ProfileField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let selected = index == app.profile.selected;
            let value = if selected && app.profile.editing {
                format!("{}_", app.profile.input)
            } else {
                field.display_value(user)
            };
            let style = if selected { palette.selected } else { Style::default() };
            Row::new(vec![Cell::from(field.label()), Cell::from(value)]).style(style)
        })
        .collect();
    let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(10)])
        .block(Block::default().borders(Borders::ALL).title("Personal Information"));
    f.render_widget(table, chunks[1]);

    let dark = if app.theme == Theme::Dark { "on" } else { "off" };
    let settings = Paragraph::new(format!("Dark mode: {dark} (t to toggle)"))
        .block(Block::default().borders(Borders::ALL).title("App Settings"));
    f.render_widget(settings, chunks[2]);
}

fn render_notifications(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let rows: Vec<Row> = app
        .notifications
        .iter()
        .enumerate()
        .map(|(index, setting)| {
            let (state, color) = if setting.enabled { ("[on] ", palette.accent) } else { ("[off]", palette.muted) };
            let style = if index == app.selected { palette.selected } else { Style::default() };
            Row::new(vec![
                Cell::from(state).style(Style::default().fg(color)),
                Cell::from(setting.title.clone()),
                Cell::from(setting.description.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(5), Constraint::Length(20), Constraint::Min(20)])
        .block(Block::default().borders(Borders::ALL).title("Notification Preferences"))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_integrations(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let state = &app.integrations;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let quote_lines = match (&state.quote, state.loading_quote) {
        (_, true) => vec![Line::styled("Loading quote...", Style::default().fg(palette.muted))],
        (Some(quote), false) => vec![
            Line::raw(format!("\"{}\"", quote.text)),
            Line::styled(format!("- {}", quote.author), Style::default().fg(palette.muted)),
        ],
        (None, false) => vec![Line::styled("Press r to load a quote", Style::default().fg(palette.muted))],
    };
    let quote = Paragraph::new(quote_lines)
        .block(Block::default().borders(Borders::ALL).title("Daily Motivation"))
        .wrap(Wrap { trim: true });
    f.render_widget(quote, chunks[0]);

    let searching = app.mode == AppMode::Editing;
    let search_style = if searching { Style::default().fg(palette.accent) } else { Style::default() };
    let cursor = if searching { "_" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", state.query))
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title("Search exercises or muscle groups (/)"));
    f.render_widget(search, chunks[1]);

    let block = Block::default().borders(Borders::ALL).title("Exercise Database");
    if state.loading_exercises {
        f.render_widget(Paragraph::new("Searching...").block(block), chunks[2]);
        return;
    }
    if state.exercises.is_empty() {
        f.render_widget(Paragraph::new("No exercises found.").block(block), chunks[2]);
        return;
    }

    let rows: Vec<Row> = state
        .exercises
        .iter()
        .map(|exercise| {
            Row::new(vec![
                Cell::from(exercise.name.clone()),
                Cell::from(exercise.muscle_group.clone()),
                Cell::from(exercise.difficulty.clone()),
                Cell::from(exercise.instructions.clone()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [Constraint::Length(10), Constraint::Length(10), Constraint::Length(13), Constraint::Min(20)],
    )
    .header(Row::new(vec!["Name", "Muscle", "Difficulty", "Instructions"]).style(Style::default().fg(palette.accent)))
    .block(block)
    .column_spacing(1);
    f.render_widget(table, chunks[2]);
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = if let Some(status) = &app.status_message {
        status.clone()
    } else {
        match (app.mode, &app.route) {
            (AppMode::Help, _) => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
            (AppMode::Editing, Route::Profile) => format!("Editing {}: Enter to save, Esc to cancel", app.profile.field().label()),
            (AppMode::Editing, _) => "Type to search | Enter/Esc: done".to_string(),
            (AppMode::Normal, Route::Auth) => "Tab/↑↓: field | Enter: submit | Ctrl+R: login/register | Ctrl+C: quit".to_string(),
            (AppMode::Normal, Route::Dashboard) => "↑↓: select | Enter: open | Space: done/not done | x: export | 1-5/Tab: pages | ?: help | q: quit".to_string(),
            (AppMode::Normal, Route::WorkoutDetail(_)) => "b/Esc: back | c: mark done/not done | s: share".to_string(),
            (AppMode::Normal, Route::Analytics) => "e: export data | 1-5/Tab: pages | ?: help | q: quit".to_string(),
            (AppMode::Normal, Route::Profile) => "↑↓: field | Enter: edit | t: theme | L: logout".to_string(),
            (AppMode::Normal, Route::Notifications) => "↑↓: select | Space: toggle | ?: help".to_string(),
            (AppMode::Normal, Route::Integrations) => "/: search | a: show all | r: new quote | ?: help".to_string(),
        }
    };

    let style = match app.mode {
        AppMode::Normal => Style::default(),
        AppMode::Editing => Style::default().fg(Color::Green),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };
    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status").border_style(Style::default().fg(palette.muted)))
        .style(style);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, palette: &Palette, scroll: usize) {
    let popup = centered(f.area(), 80, 80);
    let total = HELP_TEXT.lines().count();
    let visible = usize::from(popup.height.saturating_sub(2));
    let top = scroll.min(total.saturating_sub(visible));

    let help = Paragraph::new(HELP_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("FitTrack Help ({}/{})", top + 1, total))
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(palette.base)
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Min(0),
        ])
        .split(rows[1])[1]
}

const HELP_TEXT: &str = r#"FITTRACK PRO KEYBOARD REFERENCE

=== PAGES ===
1               Dashboard: upcoming tasks and recent history
2               Analytics: weekly activity and weight progress
3               Integrations: daily quote and exercise database
4               Notifications: reminder preferences
5               Profile: personal information and settings
Tab/Shift+Tab   Next / previous page

=== DASHBOARD ===
↑↓ or j/k       Select a workout
Enter           Open workout details
Space or c      Mark as done / not done
x               Export workouts to CSV

=== WORKOUT DETAILS ===
c               Mark as done / not done
s               Copy a summary to the clipboard
b/Esc           Back to the dashboard

=== ANALYTICS ===
e               Export chart data to CSV

=== PROFILE ===
↑↓ or j/k       Select a field
Enter           Edit the field (Enter saves, Esc cancels)

=== INTEGRATIONS ===
/               Search exercises by name or muscle group
a               Show all exercises
r               Fetch a new quote

=== ANYWHERE ===
t               Toggle dark mode
L               Log out
F1 or ?         Show this help
q               Quit (Ctrl+C also quits from the sign-in screen)

=== SIGN IN ===
Tab/↑↓          Move between fields
Enter           Submit
Ctrl+R or F2    Switch between login and registration
                In validated mode the login password is 'password'
                Registration age is a whole number from 13 to 120

Your session, theme and workouts are saved automatically."#;
