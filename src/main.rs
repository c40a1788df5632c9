use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use candidate_assessment::{
    Assessment, AssessmentConfig, DEFAULT_CANDIDATE_ID, builtin_questions,
    load_questions_from_json,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from (built-in bank when omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Candidate identifier shown on the assessment, display only
    #[arg(short, long, default_value = DEFAULT_CANDIDATE_ID)]
    token: String,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let questions = match &args.questions {
        Some(path) => match load_questions_from_json(path) {
            Ok(questions) => {
                info!(
                    count = questions.len(),
                    path = %path.display(),
                    "loaded question bank"
                );
                questions
            }
            Err(e) => {
                eprintln!("Failed to load questions: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let questions = builtin_questions();
            info!(count = questions.len(), "using built-in question bank");
            questions
        }
    };

    let config = AssessmentConfig::new(args.token.clone(), questions);

    match Assessment::new(config).run() {
        Ok(Some(outcome)) => {
            let answers_json =
                serde_json::to_string(&outcome.answers).unwrap_or_default();
            info!(
                candidate = %args.token,
                score = outcome.score,
                correct = outcome.correct,
                total = outcome.total,
                answers = %answers_json,
                "assessment submitted"
            );
            println!(
                "Assessment submitted! Your score: {}%",
                outcome.display_score()
            );
        }
        Ok(None) => {
            info!(candidate = %args.token, "assessment abandoned without submitting");
        }
        Err(e) => {
            eprintln!("Error running assessment: {}", e);
            std::process::exit(1);
        }
    }
}

// Logs go to stderr so the alternate screen on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
