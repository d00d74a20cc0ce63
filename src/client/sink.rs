// ============================================================================
// Payment Output Sinks
// ============================================================================
//
// Where processed-payment lines end up. The console sink prints them; a
// ledger or telemetry sink can take its place behind the same trait.
//
// ============================================================================

pub trait PaymentSink {
    fn record(&mut self, line: &str);
}

/// Writes each line to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl PaymentSink for ConsoleSink {
    fn record(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory, in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
impl PaymentSink for MemorySink {
    fn record(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
