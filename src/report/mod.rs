//! Text reports for the CLI frontend.
//!
//! Writes readings and sweep tables as CSV to any [`Write`] sink, usually
//! stdout, so they can be piped into a plotting tool.

use std::io::{self, Write};

use crate::circuit::Readings;
use crate::error::{OhmError, Result};
use crate::sweep::{Chart, SweepResult};

/// Which table a sweep report contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SweepTable {
    /// Every quantity against position.
    #[default]
    Full,
    /// External and internal voltage against current.
    Voltage,
    /// External, lost and full power against current.
    Power,
}

fn output_error(e: io::Error) -> OhmError {
    OhmError::OutputError {
        message: e.to_string(),
    }
}

/// CSV report writer.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl ReportWriter<io::Stdout> {
    /// Create a writer on stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `quantity,value` lines for one set of readings.
    pub fn write_readings(&mut self, readings: &Readings) -> Result<()> {
        writeln!(self.out, "quantity,value").map_err(output_error)?;
        for (name, value) in readings.entries() {
            writeln!(self.out, "{name},{value}").map_err(output_error)?;
        }
        writeln!(self.out, "short_circuit,{}", readings.short_circuit).map_err(output_error)?;
        Ok(())
    }

    /// Write one sweep as a CSV table.
    pub fn write_sweep(&mut self, result: &SweepResult, table: SweepTable) -> Result<()> {
        match table {
            SweepTable::Full => self.write_full_table(result),
            SweepTable::Voltage => self.write_chart(&result.voltage_chart()),
            SweepTable::Power => self.write_chart(&result.power_chart()),
        }
    }

    fn write_full_table(&mut self, result: &SweepResult) -> Result<()> {
        writeln!(
            self.out,
            "position,resistance,current,u_external,u_internal,p_full,p_external,p_loss"
        )
        .map_err(output_error)?;

        for s in result.samples() {
            writeln!(
                self.out,
                "{},{},{},{},{},{},{},{}",
                s.position,
                s.resistance,
                s.current,
                s.u_external,
                s.u_internal,
                s.p_full,
                s.p_external,
                s.p_loss
            )
            .map_err(output_error)?;
        }
        Ok(())
    }

    /// Write a chart as `x,series...` columns under a `# title` comment.
    pub fn write_chart(&mut self, chart: &Chart) -> Result<()> {
        writeln!(self.out, "# {} [{} vs {}]", chart.title, chart.y_label, chart.x_label)
            .map_err(output_error)?;

        let mut header = chart.x_label.replace(',', "");
        for series in &chart.series {
            header.push(',');
            header.push_str(&series.name);
        }
        writeln!(self.out, "{header}").map_err(output_error)?;

        for row in (0..chart.len()).map_while(|i| chart.row(i)) {
            let line = row
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(self.out, "{line}").map_err(output_error)?;
        }
        Ok(())
    }

    /// Flush the output stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(output_error)
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
