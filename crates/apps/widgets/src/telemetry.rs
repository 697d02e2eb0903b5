//! Simulated readings for the CPU, console and stats widgets.
//!
//! Every step function takes its randomness as `0.0..1.0` samples so the drift rules are testable
//! without a browser.

/// CPU load the widget shows before its first tick.
pub const INITIAL_CPU_LOAD: f64 = 60.0;

/// Console lines kept on screen.
pub const CONSOLE_CAPACITY: usize = 8;

/// Boot transcript of the console widget.
pub const CONSOLE_BOOT_LINES: [&str; 8] = [
    "Initializing Batcomputer systems...",
    "Loading surveillance networks...",
    "Connecting to WayneTech satellites...",
    "Establishing secure communications...",
    "Monitoring Gotham City grid...",
    "All systems operational.",
    "Dark Knight protocol active.",
    "Ready for mission deployment.",
];

const CONSOLE_STATUS_LINES: [&str; 8] = [
    "Scanning for criminal activity...",
    "Updating threat assessment...",
    "Monitoring police frequencies...",
    "Analyzing traffic patterns...",
    "Checking security protocols...",
    "Surveillance systems online.",
    "Database synchronization complete.",
    "All systems nominal.",
];

/// Uniform sample in `0.0..1.0`; natively a fixed midpoint.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

/// Drifts the load by up to ±10 points, kept within `10..=90`.
pub fn next_cpu_load(previous: f64, sample: f64) -> f64 {
    (previous + sample * 20.0 - 10.0).clamp(10.0, 90.0)
}

/// Status line picked by `sample`.
pub fn console_status_line(sample: f64) -> &'static str {
    let index = (sample.clamp(0.0, 1.0) * CONSOLE_STATUS_LINES.len() as f64) as usize;
    CONSOLE_STATUS_LINES[index.min(CONSOLE_STATUS_LINES.len() - 1)]
}

/// Appends `line`, dropping the oldest lines beyond [`CONSOLE_CAPACITY`].
pub fn push_console_line(lines: &mut Vec<String>, line: impl Into<String>) {
    lines.push(line.into());
    if lines.len() > CONSOLE_CAPACITY {
        let overflow = lines.len() - CONSOLE_CAPACITY;
        lines.drain(0..overflow);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserStats {
    /// Network throughput in GB/s.
    pub network_gbps: f64,
    /// Average CPU temperature reading.
    pub temperature: u32,
    /// Battery charge percentage.
    pub battery: f64,
    /// Resident memory in GB.
    pub ram_gb: f64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            network_gbps: 1.2,
            temperature: 42,
            battery: 87.0,
            ram_gb: 6.8,
        }
    }
}

impl UserStats {
    /// Next reading; `sample` is called once per field.
    pub fn next(&self, mut sample: impl FnMut() -> f64) -> Self {
        Self {
            network_gbps: sample() * 2.0 + 0.5,
            temperature: (sample() * 20.0 + 35.0).floor() as u32,
            battery: (self.battery + sample() * 10.0 - 5.0).clamp(10.0, 100.0),
            ram_gb: (self.ram_gb + sample() * 2.0 - 1.0).clamp(2.0, 8.0),
        }
    }

    pub fn network_text(&self) -> String {
        format!("{:.1} GB/s", self.network_gbps)
    }

    pub fn ram_text(&self) -> String {
        format!("{:.1}G RAM", self.ram_gb)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cpu_load_drifts_within_bounds() {
        assert_eq!(next_cpu_load(INITIAL_CPU_LOAD, 0.5), 60.0);
        assert_eq!(next_cpu_load(85.0, 1.0), 90.0);
        assert_eq!(next_cpu_load(12.0, 0.0), 10.0);
    }

    #[test]
    fn console_keeps_the_newest_lines() {
        let mut lines: Vec<String> = CONSOLE_BOOT_LINES.iter().map(|l| l.to_string()).collect();

        push_console_line(&mut lines, console_status_line(0.0));
        push_console_line(&mut lines, console_status_line(1.0));

        assert_eq!(lines.len(), CONSOLE_CAPACITY);
        assert_eq!(lines[0], "Establishing secure communications...");
        assert_eq!(lines[6], "Scanning for criminal activity...");
        assert_eq!(lines[7], "All systems nominal.");
    }

    #[test]
    fn stats_step_clamps_battery_and_ram() {
        let stats = UserStats {
            battery: 99.0,
            ram_gb: 2.2,
            ..UserStats::default()
        };
        let mut samples = [0.25, 0.5, 1.0, 0.0].into_iter();

        let next = stats.next(|| samples.next().unwrap_or(0.5));

        assert_eq!(next.network_text(), "1.0 GB/s");
        assert_eq!(next.temperature, 45);
        assert_eq!(next.battery, 100.0);
        assert_eq!(next.ram_gb, 2.0);
        assert_eq!(UserStats::default().ram_text(), "6.8G RAM");
    }
}
