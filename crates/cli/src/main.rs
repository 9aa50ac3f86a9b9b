//! Command-line frontend: estimate, tabulate, or dump JSON.

mod table;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cryptoforge_core::{EstimatorConfig, MemoryAccess, Report};
use cryptoforge_mq::{mq_estimator, MqProblem};
use cryptoforge_sd::{sd_estimator, SdProblem};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cryptoforge", about = "Bit-complexity estimates for hard cryptographic problems")]
struct Cli {
    /// Memory access cost model added to the time complexity.
    #[arg(long, value_enum, default_value = "constant")]
    memory_access: MemoryAccessArg,

    /// Report complexities in the algorithms' native units instead of bits.
    #[arg(long, default_value_t = false)]
    no_bit_complexities: bool,

    /// Upper bound on the memory complexity (log2 bits).
    #[arg(long)]
    memory_bound: Option<f64>,

    /// Comma-separated list of algorithms to leave out.
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Decimal digits in the rendered table.
    #[arg(long, default_value_t = 1)]
    precision: usize,

    /// Truncate instead of rounding.
    #[arg(long, default_value_t = false)]
    truncate: bool,

    /// Show the chosen tuning parameters.
    #[arg(long, default_value_t = false)]
    all_parameters: bool,

    /// Include the asymptotic tilde-O columns.
    #[arg(long, default_value_t = false)]
    tilde_o: bool,

    /// Include the quantum time column.
    #[arg(long, default_value_t = false)]
    quantum: bool,

    /// Emit the report as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Debug)]
enum MemoryAccessArg {
    Constant,
    Logarithmic,
    SquareRoot,
    CubeRoot,
}

impl From<MemoryAccessArg> for MemoryAccess {
    fn from(value: MemoryAccessArg) -> MemoryAccess {
        match value {
            MemoryAccessArg::Constant => MemoryAccess::Constant,
            MemoryAccessArg::Logarithmic => MemoryAccess::Logarithmic,
            MemoryAccessArg::SquareRoot => MemoryAccess::SquareRoot,
            MemoryAccessArg::CubeRoot => MemoryAccess::CubeRoot,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Syndrome decoding over F2.
    Sd {
        /// Code length.
        #[arg(long)]
        n: u64,
        /// Code dimension.
        #[arg(long)]
        k: u64,
        /// Error weight.
        #[arg(long)]
        w: u64,
    },
    /// Multivariate quadratic systems over F_q.
    Mq {
        /// Number of variables.
        #[arg(long)]
        n: u64,
        /// Number of polynomials.
        #[arg(long)]
        m: u64,
        /// Field order.
        #[arg(long)]
        q: u64,
    },
}

fn estimator_config(cli: &Cli) -> EstimatorConfig {
    EstimatorConfig {
        bit_complexities: !cli.no_bit_complexities,
        memory_access: cli.memory_access.clone().into(),
        precision: cli.precision,
        truncate: cli.truncate,
        show_all_parameters: cli.all_parameters,
        show_tilde_o_time: cli.tilde_o,
        show_quantum_complexity: cli.quantum,
        ..EstimatorConfig::default()
    }
}

fn run(cli: Cli) -> Result<Report> {
    let config = estimator_config(&cli);
    let report = match cli.command {
        Command::Sd { n, k, w } => {
            let mut problem = SdProblem::new(n, k, w)?;
            if let Some(bound) = cli.memory_bound {
                problem = problem.with_memory_bound(bound);
            }
            let mut estimator = sd_estimator(problem, &cli.exclude, config);
            info!(algorithms = estimator.nalgorithms(), "estimating syndrome decoding");
            estimator.estimate()
        }
        Command::Mq { n, m, q } => {
            let mut problem = MqProblem::new(n, m, q)?;
            if let Some(bound) = cli.memory_bound {
                problem = problem.with_memory_bound(bound);
            }
            let mut estimator = mq_estimator(problem, &cli.exclude, config);
            info!(algorithms = estimator.nalgorithms(), "estimating multivariate quadratic");
            estimator.estimate()
        }
    };
    Ok(report)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let report = run(cli)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", table::render_table(&report));
    }
    Ok(())
}
