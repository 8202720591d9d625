//! traitscope CLI
//!
//! Usage:
//!   traitscope                              # Interactive questionnaire
//!   traitscope --answers answers.json       # Score a saved answer file
//!   traitscope --answers answers.json --json
//!   traitscope --guide [QUERY]              # Browse / search the trait guide
//!   traitscope --trait rope-bunny           # One trait in detail
//!   traitscope --serve                      # HTTP API server

use clap::Parser;
use colored::Colorize;
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use traitscope::core::taxonomy;
use traitscope::core::question_bank::stage2_questions;
use traitscope::core::{EnvelopeGenerator, MemoryStorage, QuestionnaireSession, ResultStore, run_server};
use traitscope::types::{AnswerMap, Likert, ResultEnvelope, SessionState, Stage1Preview, TraitScore};
use traitscope::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "traitscope",
    version = VERSION,
    about = "Two-stage self-report questionnaire with a 26-trait affinity profile",
    long_about = "traitscope runs a short exploratory questionnaire (stage 1) and a full\n\
                  scored questionnaire (stage 2), then reports a percentage per trait.\n\n\
                  Answers use a 0-4 scale:\n  \
                  0 Strongly disagree  1 Disagree  2 Neutral  3 Agree  4 Strongly agree\n\n\
                  Results are kept for this session only and never leave the machine\n\
                  (the --serve API is stateless)."
)]
struct Args {
    /// Run the interactive questionnaire (default)
    #[arg(short, long)]
    interactive: bool,

    /// Score a JSON file of {"stage1_answers": {...}, "stage2_answers": {...}}
    #[arg(short, long, value_name = "FILE")]
    answers: Option<String>,

    /// List traits, optionally filtered by a search query
    #[arg(short, long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    guide: Option<String>,

    /// Show one trait in detail
    #[arg(short = 't', long = "trait", value_name = "ID")]
    trait_id: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show all 26 traits in results, not just the top 3
    #[arg(long)]
    all: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

/// Answer file for --answers
#[derive(Debug, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    stage1_answers: AnswerMap,
    stage2_answers: AnswerMap,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(if args.serve { "info" } else { "warn" });
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref path) = args.answers {
        run_answers_file(path, &args);
    } else if let Some(ref query) = args.guide {
        run_guide(query, &args);
    } else if let Some(ref id) = args.trait_id {
        run_trait(id, &args);
    } else {
        run_interactive(&args);
    }
}

/// Log to stderr, filtered by RUST_LOG
fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Score a saved answer file
fn run_answers_file(path: &str, args: &Args) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => fail(&format!("Cannot read {}: {}", path, e)),
    };
    let file: AnswersFile = match serde_json::from_str(&raw) {
        Ok(file) => file,
        Err(e) => fail(&format!("Invalid answer file {}: {}", path, e)),
    };

    let result = EnvelopeGenerator::new().generate(
        &file.stage1_answers,
        &file.stage2_answers,
        stage2_questions(),
    );
    let Some(envelope) = result.envelope else {
        fail(&format!("{}", result.reason));
    };

    if args.json {
        print_json(&envelope);
    } else {
        print_result(&envelope, args.all);
    }
}

/// Trait guide listing
fn run_guide(query: &str, args: &Args) {
    let hits = taxonomy::search(query);
    if args.json {
        print_json(&hits);
        return;
    }

    println!(
        "{} traits, {} shown{}",
        traitscope::TRAIT_COUNT,
        hits.len(),
        if query.trim().is_empty() { String::new() } else { format!(" for \"{}\"", query.trim()) }
    );
    println!();
    for t in hits {
        let tags: Vec<String> = t.tags.iter().take(3).map(|tag| format!("#{}", tag)).collect();
        println!("  {:<18} {}", t.name.bold(), t.one_liner);
        println!("  {:<18} {}", t.id.as_str().dimmed(), tags.join(" ").dimmed());
    }
}

/// One trait in detail; unknown ids fall back to the raw id
fn run_trait(id: &str, args: &Args) {
    let Some(trait_id) = traitscope::types::TraitId::parse(id) else {
        let shown = taxonomy::display(id);
        if args.json {
            print_json(&shown);
        } else {
            println!("{}", shown.title.bold());
            println!("No guide entry for this trait.");
        }
        return;
    };

    let t = taxonomy::meta(trait_id);
    if args.json {
        print_json(t);
        return;
    }

    println!("{}", t.name.bold());
    println!("{}", t.one_liner);
    println!("{}", t.tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ").dimmed());
    for (heading, body) in [
        ("Description", t.description),
        ("In relationships", t.relationship),
        ("Cautions", t.cautions),
    ] {
        println!();
        println!("{}", heading.underline());
        for line in body.lines() {
            println!("  {}", line);
        }
    }
}

/// Interactive questionnaire
fn run_interactive(args: &Args) {
    let mut session = QuestionnaireSession::new(ResultStore::new(MemoryStorage::new()));

    print_header();
    println!("For fun and reflection only; not a diagnosis.");
    println!("Any real-world play assumes clear consent and safety.");
    println!("Answers stay in this session and are never sent anywhere.");
    println!();

    let adult = ask_yes_no("Are you an adult (19 or older)? [y/N] ");
    let content = ask_yes_no("Do you agree to see adult-themed wording? [y/N] ");
    let out = session.accept_consent(adult, content);
    if !out.accepted() {
        println!("{}", out.to_terminal_string());
        return;
    }

    loop {
        match session.state() {
            SessionState::Stage1 | SessionState::Stage2 => {
                if !quiz_step(&mut session) {
                    break;
                }
            }
            SessionState::Stage1Result => {
                if let Some(preview) = session.preview() {
                    print_preview(preview);
                }
                println!("[2] start the full test  [r] retake stage 1  [x] start over  [q] quit");
                match read_line("> ").as_deref() {
                    Some("2") => {
                        session.start_stage2();
                    }
                    Some("r") => {
                        session.retake_stage1();
                    }
                    Some("x") => {
                        session.restart();
                    }
                    Some("q") | None => break,
                    Some(_) => {}
                }
            }
            SessionState::Completed => {
                match session.result() {
                    Some(envelope) => print_result(&envelope, args.all),
                    None => println!("{}", "No result stored for this session.".yellow()),
                }
                println!("[c] clear result and start over  [q] quit");
                match read_line("> ").as_deref() {
                    Some("c") => {
                        session.clear_result();
                    }
                    Some("q") | None => break,
                    Some(_) => {}
                }
            }
            SessionState::AwaitingConsent => break,
        }
    }
    println!();
    println!("Session ended.");
}

/// One question on screen; false when the user quits
fn quiz_step(session: &mut QuestionnaireSession<MemoryStorage>) -> bool {
    let Some(q) = session.current_question() else {
        return false;
    };
    let stage = session.stage().map(|s| s.to_string()).unwrap_or_default();
    let title = format!(
        "{} · {}/{} · {}%",
        stage,
        session.index() + 1,
        session.stage_len(),
        session.progress()
    );
    println!();
    println!("{}", title.color(session.state().color()));
    println!("{}", q.prompt.bold());
    let current = session.current_answer();
    for option in Likert::SCALE {
        let marker = if current == Some(option) { "●" } else { " " };
        println!("  {} [{}] {}", marker, option, option.label());
    }
    println!("{}", "0-4 answer · enter next · b back · q quit".dimmed());

    let Some(line) = read_line("> ") else {
        return false;
    };
    match line.as_str() {
        "q" => return false,
        "b" => {
            session.prev();
        }
        "" => {
            let out = session.next();
            if !out.accepted() {
                println!("{}", out.to_terminal_string());
            }
        }
        other => match other.parse::<u8>().ok().and_then(Likert::new) {
            Some(value) => {
                session.answer(value);
                session.next();
            }
            None => println!("{}", "Please enter a number from 0 to 4.".yellow()),
        },
    }
    true
}

fn print_header() {
    let line = "=".repeat(44);
    println!("{}", line.bold());
    println!("{}", format!("  traitscope v{}", VERSION).bold());
    println!("{}", line.bold());
    println!();
}

fn print_preview(preview: &Stage1Preview) {
    println!();
    println!("{}", "Stage 1 result (quick exploration)".bold());
    println!("Likelihood of tendencies: {}", preview.signal.headline().bold());
    println!("{}", preview.signal.message());
    if !preview.top3.is_empty() {
        println!();
        println!("{}", "Early hints from stage 1:".dimmed());
        for s in &preview.top3 {
            print_score_row(s);
        }
        println!("{}", "Stage 1 has few questions, so these are rough. Stage 2 is the real result.".dimmed());
    }
    println!();
}

fn print_result(envelope: &ResultEnvelope, all: bool) {
    println!();
    println!("{}", "Test result".bold());
    println!("{}", format!("Created {}", envelope.created_at.format("%Y-%m-%d %H:%M UTC")).dimmed());
    println!();
    for (rank, s) in envelope.top3.iter().enumerate() {
        let shown = taxonomy::display(s.trait_id.as_str());
        println!("  #{} {} {}%", rank + 1, shown.title.bold().green(), s.percent);
        println!("     {} {}", bar(s.percent), shown.summary.dimmed());
    }

    if all {
        println!();
        println!("{}", "All traits (percent, highest first)".underline());
        for s in &envelope.scores {
            print_score_row(s);
        }
    }
    println!();
    println!("{}", "For reference only. Consent, safety, stop signals and aftercare come first.".dimmed());
    println!();
}

fn print_score_row(s: &TraitScore) {
    let shown = taxonomy::display(s.trait_id.as_str());
    println!("  {:<18} {:>3}% {}", shown.title, s.percent, bar(s.percent));
}

/// 20-cell percent bar
fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) / 5;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Cannot serialize output: {}", e)),
    }
}

fn ask_yes_no(prompt: &str) -> bool {
    matches!(read_line(prompt).as_deref(), Some("y") | Some("yes"))
}

/// Prompt and read one trimmed, lowercased line; None on EOF or read error
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message.red());
    std::process::exit(1);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    print_header();
    if let Err(e) = run_server(&args.addr).await {
        fail(&format!("Server error: {}", e));
    }
}
