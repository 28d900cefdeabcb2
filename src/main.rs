//! Ohm - DC supply and potentiometer calculator
//!
//! Computes the current, voltages and powers of a power supply with internal
//! resistance driving a potentiometer, or sweeps the potentiometer and prints
//! the curves as CSV.
//!
//! # Usage
//!
//! ```bash
//! ohm readings --emf 12 --internal 0.5 --max 100 --resistance 20
//! RUST_LOG=debug ohm sweep --emf 12 --internal 0.5 --max 100 --table voltage
//! ```

use clap::{Args, Parser, Subcommand};
use ohm_core::{
    error::Result,
    report::{ReportWriter, SweepTable},
    Session, SessionInput, SweepConfig,
};
use tracing_subscriber::EnvFilter;

/// DC power supply and potentiometer calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// The circuit every command works on.
#[derive(Args, Debug)]
struct CircuitArgs {
    /// Electromotive force of the supply in volts
    #[arg(long, allow_hyphen_values = true)]
    emf: String,

    /// Internal resistance of the supply in ohms
    #[arg(long, allow_hyphen_values = true)]
    internal: String,

    /// Full-travel resistance of the potentiometer in ohms
    #[arg(long, allow_hyphen_values = true)]
    max: String,
}

impl CircuitArgs {
    fn start(&self) -> Result<Session> {
        Session::start(&SessionInput::new(&self.emf, &self.internal, &self.max))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every derived quantity for one potentiometer setting
    Readings {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Wiper position in percent (0-100)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "resistance")]
        position: Option<f64>,

        /// External resistance in ohms, within the potentiometer range
        #[arg(long, allow_hyphen_values = true)]
        resistance: Option<String>,
    },

    /// Sweep the potentiometer over its full travel and print a CSV table
    Sweep {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Number of samples (default: chosen from the potentiometer size)
        #[arg(long)]
        steps: Option<usize>,

        /// Which table to print
        #[arg(long, value_enum, default_value_t = SweepTable::Full)]
        table: SweepTable,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut writer = ReportWriter::stdout();

    match cli.command {
        Command::Readings {
            circuit,
            position,
            resistance,
        } => {
            let mut session = circuit.start()?;
            if let Some(percent) = position {
                session.set_position(percent)?;
            }
            if let Some(text) = resistance {
                session.enter_resistance(&text)?;
            }
            writer.write_readings(&session.readings())?;
        }

        Command::Sweep {
            circuit,
            steps,
            table,
        } => {
            let session = circuit.start()?;
            let mut config = SweepConfig::new();
            if let Some(steps) = steps {
                config = config.with_steps(steps);
            }
            let result = session.sweep(&config)?;
            writer.write_sweep(&result, table)?;
        }
    }

    writer.flush()
}
