use anyhow::{bail, Context, Result};
use catalog::{Catalog, Product, ProductId, ScoreVector};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{scoring, QuizEngine, QuizState, TieBreak};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Lumora Quiz - find the right sleep mask
#[derive(Parser)]
#[command(name = "lumora-quiz")]
#[command(about = "Sleep mask recommendation quiz", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the built-in Lumora quiz
    #[arg(short, long, env = "LUMORA_CATALOG")]
    catalog: Option<PathBuf>,

    /// Which product wins when totals are equal
    #[arg(long, value_enum, default_value_t = TieBreakArg::First)]
    tie_break: TieBreakArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quiz questions and their options
    Questions,

    /// List the product lineup, or one product
    Products {
        /// Product id: core, natural, travel or max
        product: Option<ProductId>,
    },

    /// Replay a list of answers and print the recommendation
    Recommend {
        /// Option values in question order, e.g. noise,traveler,mid,portable
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<String>,

        /// Show the score of every product
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Take the quiz interactively
    Take,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Earlier product in catalog order wins
    First,
    /// Later product in catalog order wins
    Last,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::FirstDeclared,
            TieBreakArg::Last => TieBreak::LastDeclared,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::lumora(),
    };
    debug!("Catalog ready with {} questions", catalog.len());
    let engine = QuizEngine::new(Arc::new(catalog)).with_tie_break(cli.tie_break.into());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Questions => handle_questions(&engine, &mut out)?,
        Commands::Products { product } => handle_products(&engine, product, &mut out)?,
        Commands::Recommend {
            answers,
            explain,
            json,
        } => handle_recommend(&engine, &answers, explain, json, &mut out)?,
        Commands::Take => {
            let stdin = io::stdin();
            run_session(&engine, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Handle the 'questions' command
fn handle_questions(engine: &QuizEngine, out: &mut impl Write) -> Result<()> {
    for (step, question) in engine.catalog().questions().iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            format!("{}.", step + 1).bold().blue(),
            question.prompt.bold()
        )?;
        for option in &question.options {
            writeln!(
                out,
                "   {} {:<12} {}",
                "•".green(),
                option.value,
                option.text
            )?;
        }
    }
    Ok(())
}

/// Handle the 'products' command
fn handle_products(
    engine: &QuizEngine,
    only: Option<ProductId>,
    out: &mut impl Write,
) -> Result<()> {
    let products = engine.catalog().products();
    for (id, product) in products.iter().filter(|(id, _)| only.map_or(true, |o| o == *id)) {
        writeln!(out, "{} {}", format!("[{}]", id).dimmed(), product.name.bold())?;
        print_product_details(product, out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &QuizEngine,
    answers: &[String],
    explain: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let state = replay_answers(engine, answers)?;
    let product_id = state
        .recommended_product()
        .context("Completed quiz has no recommendation")?;
    let product = engine.catalog().product(product_id);
    let totals = engine.tally(&state)?;

    if json {
        let report = serde_json::json!({
            "product": product_id,
            "name": product.name,
            "price": product.price,
            "scores": totals,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    print_recommendation(product_id, product, out)?;
    if explain {
        print_ranking(&totals, product_id, out)?;
    }
    Ok(())
}

/// Feed option values through the engine, one per question
fn replay_answers(engine: &QuizEngine, answers: &[String]) -> Result<QuizState> {
    let total = engine.catalog().len();
    if answers.len() != total {
        bail!(
            "Expected {} answers (one per question), got {}",
            total,
            answers.len()
        );
    }

    let mut state = engine.reset();
    for (i, value) in answers.iter().enumerate() {
        state = engine
            .choose_option(state, value.trim())
            .with_context(|| format!("Answer #{} ({}) was rejected", i + 1, value))?;
    }
    Ok(state)
}

/// Run an interactive quiz over any line-based input.
///
/// Returns the state the session ended in.
fn run_session(engine: &QuizEngine, input: impl BufRead, out: &mut impl Write) -> Result<QuizState> {
    let mut state = engine.reset();
    let mut lines = input.lines();

    loop {
        print_screen(engine, &state, out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        match line.trim() {
            "q" => break,
            "r" => state = engine.reset(),
            "b" => match engine.step_back(state.clone()) {
                Ok(previous) => state = previous,
                Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
            },
            choice => state = apply_choice(engine, state, choice, out)?,
        }
    }
    Ok(state)
}

/// Answer the current question with a 1-based option number
fn apply_choice(
    engine: &QuizEngine,
    state: QuizState,
    choice: &str,
    out: &mut impl Write,
) -> Result<QuizState> {
    let Some(question) = engine.current_question(&state) else {
        writeln!(out, "{}", "Quiz complete: r to retake, q to quit".yellow())?;
        return Ok(state);
    };

    let option = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i));

    match option {
        Some(option) => Ok(engine.choose_option(state, &option.value)?),
        None => {
            writeln!(
                out,
                "{}",
                format!(
                    "Pick a number between 1 and {}, or b/r/q",
                    question.options.len()
                )
                .yellow()
            )?;
            Ok(state)
        }
    }
}

fn print_screen(engine: &QuizEngine, state: &QuizState, out: &mut impl Write) -> Result<()> {
    if let (Some(id), Some(product)) = (state.recommended_product(), engine.recommendation(state)) {
        writeln!(out, "{}", "Perfect Match Found!".bold().green())?;
        print_recommendation(id, product, out)?;
        writeln!(out, "{}", "r: retake quiz   q: quit".dimmed())?;
        return Ok(());
    }

    let Some(question) = engine.current_question(state) else {
        return Ok(());
    };
    writeln!(out, "{}", engine.progress(state).to_string().dimmed())?;
    writeln!(out, "{}", question.prompt.bold())?;

    let previous = state.answer_for(&question.id).map(|a| a.value.as_str());
    for (i, option) in question.options.iter().enumerate() {
        let marker = if previous == Some(option.value.as_str()) {
            "*"
        } else {
            " "
        };
        writeln!(out, " {}{} {}", marker, format!("{}.", i + 1).green(), option.text)?;
    }

    let hint = if state.current_step() > 0 {
        "b: previous   r: restart   q: quit"
    } else {
        "r: restart   q: quit"
    };
    writeln!(out, "{}", hint.dimmed())?;
    Ok(())
}

/// Helper function to print a recommended product
fn print_recommendation(id: ProductId, product: &Product, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "Based on your answers, we recommend:".bold().blue())?;
    writeln!(out, "{} {}", product.name.bold(), format!("[{}]", id).dimmed())?;
    print_product_details(product, out)
}

fn print_product_details(product: &Product, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", product.tagline.italic())?;
    writeln!(out, "{}", product.display_price().bold())?;
    writeln!(out, "{}", product.description)?;
    for feature in &product.features {
        writeln!(out, "  {} {}", "✓".green(), feature)?;
    }
    Ok(())
}

fn print_ranking(totals: &ScoreVector, winner: ProductId, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "Scores:".bold())?;
    for (id, points) in scoring::ranking(totals) {
        let line = format!("  {:<8} {:>3}", id.to_string(), points);
        if id == winner {
            writeln!(out, "{}", format!("{}  <- recommended", line).green())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
