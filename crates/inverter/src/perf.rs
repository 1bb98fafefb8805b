use std::time::Instant;

#[cfg(feature = "perf")]
use std::time::Duration;

#[cfg(feature = "perf")]
use std::sync::OnceLock;

#[cfg(feature = "perf")]
use obs_sys as obs;

#[cfg(feature = "perf")]
use crate::util::log;

#[cfg(feature = "perf")]
pub(crate) fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| match std::env::var("INVERTER_PERF") {
        Ok(v) => {
            let v = v.trim();
            !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false")
        }
        Err(_) => false,
    })
}

#[cfg(feature = "perf")]
#[derive(Clone, Copy, Default)]
struct StageStats {
    count: u64,
    total_ns: u64,
    max_ns: u64,
}

#[cfg(feature = "perf")]
impl StageStats {
    fn record(&mut self, d: Duration) {
        let ns = d.as_nanos().min(u128::from(u64::MAX)) as u64;
        self.count = self.count.saturating_add(1);
        self.total_ns = self.total_ns.saturating_add(ns);
        self.max_ns = self.max_ns.max(ns);
    }

    fn avg_ms(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        (self.total_ns as f32) / (self.count as f32) / 1_000_000.0
    }

    fn max_ms(&self) -> f32 {
        (self.max_ns as f32) / 1_000_000.0
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Stage {
    RenderSource,
    Capture,
    Upload,
    Draw,
}

pub(crate) struct RenderPerf {
    #[cfg(feature = "perf")]
    enabled: bool,
    #[cfg(feature = "perf")]
    last_log: Instant,
    #[cfg(feature = "perf")]
    interval: Duration,
    #[cfg(feature = "perf")]
    frame: StageStats,
    #[cfg(feature = "perf")]
    stages: [StageStats; 4],
    #[cfg(feature = "perf")]
    captures_missed: u64,
}

impl RenderPerf {
    pub(crate) fn new() -> Self {
        #[cfg(feature = "perf")]
        {
            Self {
                enabled: enabled(),
                last_log: Instant::now(),
                interval: Duration::from_secs(1),
                frame: StageStats::default(),
                stages: [StageStats::default(); 4],
                captures_missed: 0,
            }
        }

        #[cfg(not(feature = "perf"))]
        {
            Self {}
        }
    }

    pub(crate) fn start(&self) -> Option<Instant> {
        #[cfg(feature = "perf")]
        {
            if self.enabled {
                Some(Instant::now())
            } else {
                None
            }
        }

        #[cfg(not(feature = "perf"))]
        {
            None
        }
    }

    pub(crate) fn record(&mut self, stage: Stage, start: Option<Instant>) {
        #[cfg(feature = "perf")]
        {
            if let Some(t0) = start {
                self.stages[stage as usize].record(t0.elapsed());
            }
        }

        #[cfg(not(feature = "perf"))]
        {
            let _ = (stage, start);
        }
    }

    pub(crate) fn record_capture_miss(&mut self) {
        #[cfg(feature = "perf")]
        {
            self.captures_missed = self.captures_missed.saturating_add(1);
        }
    }

    pub(crate) fn record_frame(&mut self, start: Option<Instant>) {
        #[cfg(feature = "perf")]
        {
            if let Some(t0) = start {
                self.frame.record(t0.elapsed());
            }
            self.maybe_log();
        }

        #[cfg(not(feature = "perf"))]
        {
            let _ = start;
        }
    }

    #[cfg(feature = "perf")]
    fn maybe_log(&mut self) {
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_log);
        if dt < self.interval {
            return;
        }
        self.last_log = now;

        let secs = dt.as_secs_f32().max(1e-3);
        let fps = (self.frame.count as f32) / secs;
        let [src, capture, upload, draw] = self.stages;

        log(
            obs::LOG_INFO,
            &format!(
                "perf(render): fps={fps:.1} n={} frame={:.3}ms (max {:.3}) | src={:.3} | capture={:.3} (max {:.3}, missed {}) | upload={:.3} | draw={:.3}",
                self.frame.count,
                self.frame.avg_ms(),
                self.frame.max_ms(),
                src.avg_ms(),
                capture.avg_ms(),
                capture.max_ms(),
                self.captures_missed,
                upload.avg_ms(),
                draw.avg_ms(),
            ),
        );

        self.frame = StageStats::default();
        self.stages = [StageStats::default(); 4];
        self.captures_missed = 0;
    }
}
