//! Prometheus text exposition writer.
//!
//! Each family is written as three lines: `# HELP`, `# TYPE`, then the
//! unlabelled sample. Float samples always keep a decimal point so scrapers
//! and humans can tell them apart from integer counters.

use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Sample::Unsigned(v) => write!(f, "{v}"),
            Sample::Float(v) if v.is_nan() => f.write_str("NaN"),
            Sample::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" })
            }
            // Debug keeps the trailing ".0" on whole numbers.
            Sample::Float(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub sample: Sample,
}

impl MetricFamily {
    pub fn new(name: &'static str, help: &'static str, kind: MetricKind, sample: Sample) -> Self {
        Self { name, help, kind, sample }
    }

    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, escape_help(self.help));
        let _ = writeln!(out, "# TYPE {} {}", self.name, self.kind.as_str());
        let _ = writeln!(out, "{} {}", self.name, self.sample);
    }
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Render families in the given order.
pub fn render(families: &[MetricFamily]) -> String {
    let mut out = String::with_capacity(families.len() * 128);
    for family in families {
        family.render(&mut out);
    }
    out
}
