use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use fan_perceptron::{config::ScenarioConfig, print_array, Dataset, Model, Result, Trainer};
use rand::{rngs::StdRng, SeedableRng};


#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Log per-example training errors
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: SubCommand,
}

/// Runs the bundled three-person demo
#[derive(Parser, Debug)]
struct Demo {}

impl Demo {
    fn exec(self) -> Result<()> {
        run_scenario(&ScenarioConfig::default())
    }
}

/// Runs a scenario from a YAML or JSON file
#[derive(Parser, Debug)]
struct Run {
    scenario: PathBuf,
}

impl Run {
    fn exec(self) -> Result<()> {
        run_scenario(&ScenarioConfig::load(&self.scenario)?)
    }
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    Demo(Demo),
    Run(Run),
}


fn run_scenario(config: &ScenarioConfig) -> Result<()> {
    let people = config.examples();
    let mut rng = config.seed.map(StdRng::seed_from_u64);
    let mut trainer = Trainer::new(config.topic.as_str());

    for spec in &config.models {
        let mut model = match rng.as_mut() {
            Some(rng) => Model::with_rng(spec.id, spec.activation, rng),
            None => Model::new(spec.id, spec.activation),
        };
        println!("{}", model.to_string().bold());

        if let Err(err) = trainer.train(&mut model, &people, spec.epochs) {
            eprintln!("{}", err.to_string().red());
        }
        print_array("weights: ", &model.weights());
        println!("bias   : {:+.5}", model.bias());

        let classes = trainer.evaluate(&model, &people);
        for (person, &class) in people.iter().zip(classes.iter()) {
            let verdict = config.class_name(class).unwrap_or_default();
            let line = format!("{} -> {} ({})", person.name(), class, verdict);
            if class == person.label() {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
        println!("\n{}", trainer.stats());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    match cli.command {
        SubCommand::Demo(demo) => demo.exec(),
        SubCommand::Run(run) => run.exec(),
    }
}
