//! System information window contents with a live session uptime and simulated CPU load.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::ContentContext;
use leptos::*;

/// One labelled card on the system information page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    /// Card heading.
    pub title: &'static str,
    /// Static label/value rows.
    pub rows: &'static [(&'static str, &'static str)],
}

/// Hardware cards that never change while the page is open.
pub const STATIC_CARDS: [InfoCard; 4] = [
    InfoCard {
        title: "Operating System",
        rows: &[
            ("OS", "BatOS v1.0"),
            ("Architecture", "x86_64"),
            ("Kernel", "Linux 6.15.8"),
        ],
    },
    InfoCard {
        title: "Memory",
        rows: &[
            ("Total", "32GB DDR5"),
            ("Used", "12.5GB (39%)"),
            ("Available", "19.5GB"),
        ],
    },
    InfoCard {
        title: "Storage",
        rows: &[
            ("Total", "2TB NVMe SSD"),
            ("Used", "850GB (42%)"),
            ("Available", "1.15TB"),
        ],
    },
    InfoCard {
        title: "Security Status",
        rows: &[("Security", "Active"), ("Status", "Operational")],
    },
];

/// Formats elapsed seconds as `HH:MM:SS`; hours keep growing past 99.
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Formats a `0.0..=1.0` sample as a percentage with one decimal.
pub fn format_load(sample: f64) -> String {
    format!("{:.1}%", sample.clamp(0.0, 1.0) * 100.0)
}

fn load_sample() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.005
    }
}

#[component]
/// System information window contents.
pub fn SystemInfoApp(
    /// Mount context supplied by the desktop shell.
    context: ContentContext,
) -> impl IntoView {
    let uptime_seconds = create_rw_signal(0u64);
    let load = create_rw_signal(format_load(load_sample()));

    if let Ok(interval) = set_interval_with_handle(
        move || {
            uptime_seconds.update(|secs| *secs += 1);
            load.set(format_load(load_sample()));
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="app-shell app-system-info-shell" data-surface=context.surface_id>
            <div class="app-toolbar">
                <h1 class="system-info-title">"System Information"</h1>
                <button type="button" on:click=move |_| uptime_seconds.set(0)>"Refresh"</button>
            </div>
            <div class="system-info-grid">
                <section class="system-info-card">
                    <h2>"Processor"</h2>
                    <div><span class="info-label">"Model: "</span>"Intel Core i9-12900K"</div>
                    <div><span class="info-label">"Cores: "</span>"16 (8P + 8E)"</div>
                    <div><span class="info-label">"Load: "</span>{move || load.get()}</div>
                </section>
                <section class="system-info-card">
                    <h2>"Network"</h2>
                    <div><span class="info-label">"Interface: "</span>"Gigabit Ethernet"</div>
                    <div><span class="info-label">"IP Address: "</span>"192.168.1.100"</div>
                    <div><span class="info-label">"Status: "</span>"Connected"</div>
                    <div>
                        <span class="info-label">"Uptime: "</span>
                        {move || format_uptime(uptime_seconds.get())}
                    </div>
                </section>
                {STATIC_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <section class="system-info-card">
                                <h2>{card.title}</h2>
                                {card
                                    .rows
                                    .iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div>
                                                <span class="info-label">{format!("{label}: ")}</span>
                                                {*value}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
