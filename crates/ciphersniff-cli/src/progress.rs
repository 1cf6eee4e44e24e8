//! Progress bars for running scans.

use anyhow::{Context, Result};
use ciphersniff_core::{IndicatorReport, MatchResult, ScanContext, ScanObserver};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;

const TEMPLATE: &str = "{msg:<32} [{bar:40.cyan/blue}] {percent:>3}% {pos}/{len}";

/// Shows one transient bar per running scan and an overall indicator count
pub(crate) struct ProgressObserver {
    multi: MultiProgress,
    style: ProgressStyle,
    overall: ProgressBar,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressObserver {
    pub(crate) fn new(indicators: usize) -> Result<Self> {
        let style = ProgressStyle::with_template(TEMPLATE)
            .context("Invalid progress bar template")?
            .progress_chars("█▓▒░ ");

        let multi = MultiProgress::new();
        let overall = multi.add(ProgressBar::new(indicators as u64));
        overall.set_style(style.clone());
        overall.set_message("indicators");

        Ok(Self {
            multi,
            style,
            overall,
            bars: Mutex::new(HashMap::new()),
        })
    }

    pub(crate) fn finish(&self) {
        self.overall.finish_and_clear();
    }

    fn key(context: &ScanContext<'_>) -> String {
        format!(
            "{}\u{0}{}\u{0}{}",
            context.algorithm, context.indicator, context.byte_order
        )
    }
}

impl ScanObserver for ProgressObserver {
    fn scan_started(&self, context: &ScanContext<'_>, windows: usize) {
        let bar = self.multi.add(ProgressBar::new(windows as u64));
        bar.set_style(self.style.clone());
        bar.set_message(format!("  {} <{}>", context.indicator, context.byte_order));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(Self::key(context), bar);
        }
    }

    fn scan_advanced(&self, context: &ScanContext<'_>, position: usize) {
        if let Ok(bars) = self.bars.lock() {
            if let Some(bar) = bars.get(&Self::key(context)) {
                bar.set_position(position as u64);
            }
        }
    }

    fn scan_finished(&self, context: &ScanContext<'_>, _result: &MatchResult) {
        let bar = self
            .bars
            .lock()
            .ok()
            .and_then(|mut bars| bars.remove(&Self::key(context)));

        if let Some(bar) = bar {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
    }

    fn indicator_finished(&self, _report: &IndicatorReport) {
        self.overall.inc(1);
    }
}
