//! Desktop widget bodies: the small always-on-desktop panels the shell frames and drags.
//!
//! Each component owns only its own timers and display state. Position, stacking and visibility
//! belong to the desktop runtime.

mod clock;
mod telemetry;

pub use clock::{
    days_in_month, month_grid, month_name, shift_month, weekday, ClockSnapshot, WEEKDAY_HEADERS,
};
pub use telemetry::{
    next_cpu_load, push_console_line, random_unit, UserStats, CONSOLE_BOOT_LINES, INITIAL_CPU_LOAD,
};

use std::time::Duration;

use desktop_app_contract::ContentContext;
use leptos::*;

fn tick_every(period: Duration, tick: impl Fn() + 'static) {
    if let Ok(interval) = set_interval_with_handle(tick, period) {
        on_cleanup(move || interval.clear());
    }
}

fn use_clock() -> RwSignal<ClockSnapshot> {
    let now = create_rw_signal(ClockSnapshot::now());
    tick_every(Duration::from_secs(1), move || now.set(ClockSnapshot::now()));
    now
}

#[component]
/// Digital clock with the current date underneath.
pub fn ClockWidget(context: ContentContext) -> impl IntoView {
    let now = use_clock();

    view! {
        <div class="widget-body widget-clock" data-surface=context.surface_id>
            <div class="widget-clock-time">{move || now.get().time_text(true)}</div>
            <div class="widget-clock-date">{move || now.get().date_text()}</div>
        </div>
    }
}

#[component]
/// Month calendar with previous/next navigation; today is highlighted.
pub fn CalendarWidget(context: ContentContext) -> impl IntoView {
    let now = use_clock();
    let today = now.get_untracked();
    let shown = create_rw_signal((today.year, today.month));

    let step_month = move |forward: bool| {
        shown.update(|shown| *shown = shift_month(shown.0, shown.1, forward));
    };
    let is_today = move |day: u32| {
        let now = now.get();
        let (year, month) = shown.get();
        now.year == year && now.month == month && now.day == day
    };

    view! {
        <div class="widget-body widget-calendar" data-surface=context.surface_id>
            <div class="widget-calendar-time">{move || now.get().time_text(false)}</div>
            <div class="widget-calendar-header">
                <button
                    type="button"
                    aria-label="Previous month"
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:click=move |_| step_month(false)
                >
                    "<"
                </button>
                <span>
                    {move || {
                        let (year, month) = shown.get();
                        format!("{} {}", month_name(month), year)
                    }}
                </span>
                <button
                    type="button"
                    aria-label="Next month"
                    on:pointerdown=|ev| ev.stop_propagation()
                    on:click=move |_| step_month(true)
                >
                    ">"
                </button>
            </div>
            <div class="widget-calendar-grid">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|day| view! { <span class="widget-calendar-weekday">{*day}</span> })
                    .collect_view()}
                {move || {
                    let (year, month) = shown.get();
                    month_grid(year, month)
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => view! {
                                <span
                                    class="widget-calendar-day"
                                    class:is-today=move || is_today(day)
                                >
                                    {day}
                                </span>
                            },
                            None => view! { <span class="widget-calendar-day is-blank"></span> },
                        })
                        .collect_view()
                }}
            </div>
            <div class="widget-calendar-footer">{move || now.get().long_date_text()}</div>
        </div>
    }
}

#[component]
/// Simulated CPU usage meter.
pub fn CpuWidget(context: ContentContext) -> impl IntoView {
    let load = create_rw_signal(INITIAL_CPU_LOAD);
    tick_every(Duration::from_secs(2), move || {
        load.update(|load| *load = next_cpu_load(*load, random_unit()));
    });

    view! {
        <div class="widget-body widget-cpu" data-surface=context.surface_id>
            <div class="widget-cpu-value">{move || format!("{:.1}%", load.get())}</div>
            <div class="widget-caption">"CPU Usage"</div>
            <div class="widget-meter">
                <div
                    class="widget-meter-fill"
                    style=move || format!("width: {:.1}%;", load.get())
                ></div>
            </div>
        </div>
    }
}

#[component]
/// Scrolling system console that appends a status line every few seconds.
pub fn ConsoleWidget(context: ContentContext) -> impl IntoView {
    let lines = create_rw_signal(
        CONSOLE_BOOT_LINES
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>(),
    );
    tick_every(Duration::from_secs(3), move || {
        let line = telemetry::console_status_line(random_unit());
        lines.update(|lines| push_console_line(lines, line));
    });

    view! {
        <div class="widget-body widget-console" data-surface=context.surface_id>
            <div class="widget-caption">"System Console"</div>
            <div class="widget-console-lines" role="log">
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .map(|line| view! { <div class="widget-console-line">"> " {line}</div> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

const PROFILE_ROWS: [&str; 5] = [
    "Age: 35",
    "Gender: Male",
    "Height: 6'2\"",
    "Eye Color: Blue",
    "Hair Color: Black",
];

#[component]
/// Static dossier card.
pub fn ProfileWidget(context: ContentContext) -> impl IntoView {
    view! {
        <div class="widget-body widget-profile" data-surface=context.surface_id>
            <div class="widget-profile-name">"Bruce Wayne"</div>
            <div class="widget-profile-grid">
                {PROFILE_ROWS
                    .iter()
                    .map(|row| view! { <span>{*row}</span> })
                    .collect_view()}
            </div>
            <div class="widget-caption">"Status: Active"</div>
        </div>
    }
}

#[component]
/// Network, temperature and memory readings refreshed every three seconds.
pub fn StatsWidget(context: ContentContext) -> impl IntoView {
    let stats = create_rw_signal(UserStats::default());
    tick_every(Duration::from_secs(3), move || {
        stats.update(|stats| *stats = stats.next(random_unit));
    });

    view! {
        <div class="widget-body widget-stats" data-surface=context.surface_id>
            <div class="widget-stats-network">{move || stats.get().network_text()}</div>
            <div class="widget-stats-temperature">
                {move || format!("Average {}% CPU", stats.get().temperature)}
            </div>
            <div class="widget-caption">"Security Active"</div>
            <div class="widget-caption">{move || stats.get().ram_text()}</div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertTab {
    Disasters,
    Crime,
}

#[component]
/// Alert board with disaster and crime tabs.
///
/// No feed is wired in, so both tabs show their monitoring empty state.
pub fn AlertWidget(context: ContentContext) -> impl IntoView {
    let tab = create_rw_signal(AlertTab::Disasters);

    let tab_button = move |target: AlertTab, label: &'static str| {
        view! {
            <button
                type="button"
                class="widget-alert-tab"
                class:is-active=move || tab.get() == target
                aria-pressed=move || (tab.get() == target).to_string()
                on:pointerdown=|ev| ev.stop_propagation()
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="widget-body widget-alert" data-surface=context.surface_id>
            <div class="widget-alert-tabs">
                {tab_button(AlertTab::Disasters, "Disasters")}
                {tab_button(AlertTab::Crime, "Crime")}
            </div>
            <div class="widget-alert-empty">
                {move || match tab.get() {
                    AlertTab::Disasters => "No disaster alerts",
                    AlertTab::Crime => "No crime alerts",
                }}
                <div class="widget-caption">"Monitoring global events..."</div>
            </div>
        </div>
    }
}
