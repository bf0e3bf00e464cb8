//! `kango` - train the network on a CSV file and score it on another.
//!
//! ```bash
//! kango --train data/training_data.csv --test data/test_data.csv
//! kango --config kango.toml --gradient-rule corrected --seed 7
//! RUST_LOG=kango=debug kango
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kango::{ArchitectureConfig, Dataset, GradientRule, NetworkBuilder, loss, metrics};

#[derive(Parser)]
#[command(name = "kango")]
#[command(about = "Train a one-hidden-layer network on tabular data and report test accuracy")]
struct Cli {
    /// Training data (CSV with a header row: features, then one-hot labels)
    #[arg(long, default_value = "data/training_data.csv")]
    train: PathBuf,

    /// Test data, same layout as the training data
    #[arg(long, default_value = "data/test_data.csv")]
    test: PathBuf,

    /// TOML file with architecture settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hidden layer width
    #[arg(long)]
    hidden: Option<usize>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Gradient-descent step size
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Gradient rule used for training and prediction
    #[arg(long, value_enum)]
    gradient_rule: Option<RuleArg>,

    /// Seed for weight initialization (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    Faithful,
    Corrected,
}

impl From<RuleArg> for GradientRule {
    fn from(value: RuleArg) -> Self {
        match value {
            RuleArg::Faithful => GradientRule::Faithful,
            RuleArg::Corrected => GradientRule::Corrected,
        }
    }
}

impl Cli {
    fn architecture(&self) -> Result<ArchitectureConfig> {
        let mut cfg = match &self.config {
            Some(path) => ArchitectureConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ArchitectureConfig::default(),
        };
        if let Some(hidden) = self.hidden {
            cfg.hidden_neurons = hidden;
        }
        if let Some(epochs) = self.epochs {
            cfg.num_epochs = epochs;
        }
        if let Some(lr) = self.learning_rate {
            cfg.learning_rate = lr;
        }
        if let Some(rule) = self.gradient_rule {
            cfg.gradient_rule = rule.into();
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = cli.architecture()?;
    let builder = NetworkBuilder::from_config(cfg);
    let cfg = builder.config().context("Invalid architecture")?;
    info!(?cfg, "kango init successful");

    let train = Dataset::from_csv_path(&cli.train, cfg.input_neurons, cfg.output_neurons)
        .with_context(|| format!("Failed to load training data {}", cli.train.display()))?;
    let inputs_loaded = !train.features().as_slice().is_empty();
    let labels_loaded = !train.labels().as_slice().is_empty();
    info!(
        inputs_loaded,
        labels_loaded,
        samples = train.len(),
        "training data loaded"
    );
    train
        .validate_one_hot()
        .context("Training labels must be one-hot")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = builder.build_with_rng(&mut rng)?;

    let report = network
        .train(train.features(), train.labels())
        .context("Training failed")?;
    let train_output = network.forward(train.features())?;
    let train_mse = loss::mse(&train_output, train.labels())?;
    info!(epochs = report.epochs, train_mse, "training finished");

    let test = Dataset::from_csv_path(&cli.test, cfg.input_neurons, cfg.output_neurons)
        .with_context(|| format!("Failed to load test data {}", cli.test.display()))?;
    let predictions = network
        .predict(test.features())
        .context("Prediction failed")?;
    let accuracy = metrics::accuracy(&predictions, test.labels())?;

    info!(samples = test.len(), "scored test data");
    println!("Accuracy {:.2}", accuracy * 100.0);

    Ok(())
}
