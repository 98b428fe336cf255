//! Boston Housing Price Predictor CLI
//!
//! Terminal front end for the pre-trained model. Each housing attribute
//! is a flag with the same default the original form offered, so
//! `boston-housing predict` alone scores a typical tract.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use boston_housing::prelude::*;

#[derive(Parser)]
#[command(name = "boston-housing")]
#[command(about = "Predict Boston housing prices with a pre-trained regression model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the median home price from the 13 housing attributes
    Predict(PredictArgs),

    /// Show the loaded model's coefficients and fit statistics
    Info {
        /// Path to the model artifact
        #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
        model: String,
    },

    /// List the input fields with their labels and defaults
    Features,
}

#[derive(Args)]
struct PredictArgs {
    /// Path to the model artifact
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: String,

    /// CRIM - Per capita crime rate by town
    #[arg(long, default_value_t = 0.1)]
    crim: f64,

    /// ZN - Proportion of residential land zoned for lots over 25,000 sq.ft.
    #[arg(long, default_value_t = 0.0)]
    zn: f64,

    /// INDUS - Proportion of non-retail business acres per town
    #[arg(long, default_value_t = 7.0)]
    indus: f64,

    /// CHAS - Charles River dummy variable (1 if tract bounds river; 0 otherwise)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    chas: u8,

    /// NOX - Nitric oxides concentration (parts per 10 million)
    #[arg(long, default_value_t = 0.5)]
    nox: f64,

    /// RM - Average number of rooms per dwelling
    #[arg(long, default_value_t = 6.0)]
    rm: f64,

    /// AGE - Proportion of owner-occupied units built prior to 1940
    #[arg(long, default_value_t = 60.0)]
    age: f64,

    /// DIS - Weighted distances to five Boston employment centres
    #[arg(long, default_value_t = 4.0)]
    dis: f64,

    /// RAD - Index of accessibility to radial highways
    #[arg(long, default_value_t = 1.0)]
    rad: f64,

    /// TAX - Full-value property-tax rate per $10,000
    #[arg(long, default_value_t = 296.0)]
    tax: f64,

    /// PTRATIO - Pupil-teacher ratio by town
    #[arg(long, default_value_t = 15.0)]
    ptratio: f64,

    /// B - 1000(Bk - 0.63)^2 where Bk is the proportion of Black residents by town
    #[arg(long, default_value_t = 396.9)]
    b: f64,

    /// LSTAT - % lower status of the population
    #[arg(long, default_value_t = 12.5)]
    lstat: f64,
}

impl PredictArgs {
    fn to_vector(&self) -> FeatureVector {
        FeatureVector {
            crim: self.crim,
            zn: self.zn,
            indus: self.indus,
            chas: f64::from(self.chas),
            nox: self.nox,
            rm: self.rm,
            age: self.age,
            dis: self.dis,
            rad: self.rad,
            tax: self.tax,
            ptratio: self.ptratio,
            b: self.b,
            lstat: self.lstat,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Predict(args) => run_predict(args)?,
        Commands::Info { model } => show_info(&model)?,
        Commands::Features => list_features(),
    }

    Ok(())
}

fn run_predict(args: PredictArgs) -> Result<()> {
    info!("Loading model from {}", args.model);
    let model = ModelArtifact::load_model(&args.model)?;

    let vector = args.to_vector();
    let prediction = model.predict(&vector.to_array())?;
    info!("Model output: {:.4} (thousands of dollars)", prediction);

    println!("{}", PredictionReport::new(prediction));
    Ok(())
}

fn show_info(path: &str) -> Result<()> {
    let artifact = ModelArtifact::load(path)?;

    println!("Dataset:    {}", artifact.dataset);
    println!("Trained at: {}", artifact.trained_at);
    if let Some(metrics) = artifact.metrics {
        println!("R²:         {:.4}", metrics.r2);
        println!("RMSE:       {:.4}", metrics.rmse);
    }
    println!();

    let model = artifact.into_model()?;
    println!("{}", model.summary());
    Ok(())
}

fn list_features() {
    println!("Input fields (in model order):\n");
    for (i, field) in FIELDS.iter().enumerate() {
        println!("  {:2}. {:8} {}", i + 1, field.name, field.label);
        if field.binary {
            println!("      default: {:.0} (allowed values: 0 or 1)", field.default);
        } else {
            println!(
                "      default: {:.prec$}",
                field.default,
                prec = field.precision
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_defaults_match_form_defaults() {
        let cli = Cli::try_parse_from(["boston-housing", "predict"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.to_vector(), FeatureVector::default());
                assert_eq!(args.model, DEFAULT_MODEL_PATH);
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_chas_only_accepts_zero_or_one() {
        assert!(Cli::try_parse_from(["boston-housing", "predict", "--chas", "0"]).is_ok());
        assert!(Cli::try_parse_from(["boston-housing", "predict", "--chas", "1"]).is_ok());
        assert!(Cli::try_parse_from(["boston-housing", "predict", "--chas", "2"]).is_err());
        assert!(Cli::try_parse_from(["boston-housing", "predict", "--chas=-1"]).is_err());
    }

    #[test]
    fn test_other_fields_accept_arbitrary_floats() {
        let cli = Cli::try_parse_from([
            "boston-housing",
            "predict",
            "--nox",
            "99.9",
            "--rm=-3.5",
            "--tax",
            "0.001",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict(args) => {
                let vector = args.to_vector();
                assert_eq!(vector.nox, 99.9);
                assert_eq!(vector.rm, -3.5);
                assert_eq!(vector.tax, 0.001);
            }
            _ => panic!("expected predict command"),
        }
    }
}
