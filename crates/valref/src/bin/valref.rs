//! Replay the playground lessons and print their annotated results.

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use valref::{Lesson, LessonReport};

#[derive(Debug, Parser)]
#[command(
    name = "valref",
    version,
    about = "Replay value/reference semantics lessons"
)]
struct Cli {
    /// Lessons to run (all of them when omitted)
    #[arg(value_enum)]
    lessons: Vec<Lesson>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn selected(&self) -> Vec<Lesson> {
        if self.lessons.is_empty() {
            Lesson::ALL.to_vec()
        } else {
            self.lessons.clone()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let reports = cli
        .selected()
        .into_iter()
        .map(|lesson| {
            lesson
                .run()
                .with_context(|| format!("lesson {:?} failed", lesson))
        })
        .collect::<anyhow::Result<Vec<LessonReport>>>()?;
    tracing::info!(count = reports.len(), "lessons complete");

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).context("serializing reports")?;
        println!("{}", json);
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", report);
        }
    }
    Ok(())
}
