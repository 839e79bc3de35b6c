//! VoiceGuard CLI
//!
//! Usage:
//!   voiceguard --text "your text here"          # Score one text
//!   voiceguard --file essay.txt                 # Score a text file
//!   voiceguard --file clip.wav                  # Simulated media detection
//!   voiceguard --file upload.bin --media image  # Explicit media type
//!   voiceguard --interactive                    # Score lines from stdin
//!   voiceguard --serve                          # HTTP API server
//!   voiceguard --text "text" --json             # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;
use tracing::{error, warn};

use voiceguard::config::AppConfig;
use voiceguard::core::{run_server, text_result, MediaDetector, RecordStore, TextScorer};
use voiceguard::telemetry::init_tracing;
use voiceguard::types::{
    DetectionRecord, DetectionResult, MediaType, ScanError, ScanResult, ScoreResult, TextSignals,
};
use voiceguard::{
    BONUS_CONTRACTIONS, BONUS_EMOTIONAL_EXPRESSION, BONUS_INFORMAL_LANGUAGE,
    BONUS_NATURAL_TRANSITIONS, BONUS_PERSONAL_PRONOUNS, BONUS_SENTENCE_VARIETY,
    PENALTY_AI_PHRASE, PENALTY_COMPLEX_WORDS, PENALTY_CONSISTENT_FORMATTING,
    PENALTY_PERFECT_PUNCTUATION, PENALTY_REPETITION, VERSION,
};

#[derive(Parser, Debug)]
#[command(
    name = "voiceguard",
    version = VERSION,
    about = "VoiceGuard - Heuristic authenticity scoring for text and media",
    long_about = "VoiceGuard scores text for signs of machine generation using\n\
                  lexical and structural heuristics, and runs a simulated\n\
                  detector for image, video and audio uploads.\n\n\
                  Verdicts:\n  \
                  AUTHENTIC  - score above 65\n  \
                  UNCERTAIN  - score in (35, 65]\n  \
                  DEEPFAKE   - score at or below 35\n\n\
                  Confidence is the distance of the score from 50, scaled to 0-100."
)]
struct Args {
    /// Text to score (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Read content from a file
    #[arg(short, long)]
    file: Option<String>,

    /// Media type of --file content (image, video, audio, text);
    /// inferred from the file extension when omitted
    #[arg(short, long)]
    media: Option<String>,

    /// Interactive mode - score each stdin line
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides VOICEGUARD_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show signal breakdown
    #[arg(long)]
    verbose: bool,

    /// Directory for detection records (overrides VOICEGUARD_RECORD_DIR)
    #[arg(long)]
    record_dir: Option<String>,

    /// Disable detection records
    #[arg(long)]
    no_record: bool,

    /// User id stored with each record
    #[arg(long, default_value = "local")]
    user: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    let outcome = if args.serve {
        run_serve(&config).await
    } else if args.interactive {
        run_interactive(&args)
    } else if let Some(ref path) = args.file {
        run_file(path, &args, &config)
    } else if let Some(ref text) = args.text {
        run_single(text, &args, &config)
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args)
    };

    if let Err(e) = outcome {
        error!(error = %e, "command failed");
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

/// Environment config with CLI overrides applied
fn build_config(args: &Args) -> ScanResult<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(ref addr) = args.addr {
        config.addr = addr.clone();
    }
    if let Some(ref dir) = args.record_dir {
        config.record_dir = Some(dir.clone());
    }
    if args.no_record {
        config.record_dir = None;
    }
    Ok(config)
}

/// Score one text and record it
fn run_single(text: &str, args: &Args, config: &AppConfig) -> ScanResult<()> {
    let started = Instant::now();
    let scored = TextScorer::new().score(text)?;
    print_score(&scored, args)?;

    record(config, &args.user, MediaType::Text, &text_result(&scored), started);
    Ok(())
}

/// Score or simulate a file by its media type
fn run_file(path: &str, args: &Args, config: &AppConfig) -> ScanResult<()> {
    let media_type = match args.media {
        Some(ref media) => media.parse()?,
        None => MediaType::from_path(path)?,
    };
    let content = std::fs::read(path)?;

    if media_type == MediaType::Text {
        let text = String::from_utf8_lossy(&content);
        return run_single(&text, args, config);
    }

    let started = Instant::now();
    let result = MediaDetector::new().detect(&content, media_type)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
        println!("{}", result.details.dimmed());
        for indicator in &result.indicators {
            println!("  {} {}", "•".dimmed(), indicator);
        }
    }

    record(config, &args.user, media_type, &result, started);
    Ok(())
}

/// Interactive mode: one text per line, no recording
fn run_interactive(args: &Args) -> ScanResult<()> {
    print_header(args.no_color);
    println!("Type or paste text and press Enter to score it. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let scored = score_lines(&mut stdin.lock(), args)?;
    println!("\nSession ended. Samples scored: {}", scored);
    Ok(())
}

/// Score each line from `input` until EOF or quit; returns how many were scored
fn score_lines(input: &mut impl BufRead, args: &Args) -> ScanResult<u64> {
    let scorer = TextScorer::new();
    let mut stdout = io::stdout();
    let mut scored_count = 0u64;

    loop {
        print!("{} ", ">".bold());
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match scorer.score(line) {
            Ok(scored) => {
                scored_count += 1;
                print_score(&scored, args)?;
            }
            Err(ScanError::EmptyInput) => {
                println!("{}", "⚠ Nothing to score - enter some words".yellow());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(scored_count)
}

/// Run HTTP API server
async fn run_serve(config: &AppConfig) -> ScanResult<()> {
    println!();
    println!("{}", format!("🛡️  VoiceGuard API Server v{}", VERSION).bold());
    println!("  GET  /health         - Health check");
    println!("  POST /detect         - Detect image/video/audio/text");
    println!("  POST /analyze/text   - Text score breakdown");
    println!("  GET  /records        - Stored detections");
    println!("  GET  /records/:id    - One stored detection");
    println!();

    run_server(config)
        .await
        .map_err(|e| ScanError::Config(format!("server error: {}", e)))
}

/// Best-effort record write for CLI runs
fn record(
    config: &AppConfig,
    user: &str,
    media_type: MediaType,
    result: &DetectionResult,
    started: Instant,
) {
    let Some(ref dir) = config.record_dir else {
        return;
    };
    let record = DetectionRecord::from_result(
        user,
        media_type,
        result,
        started.elapsed().as_secs_f64(),
    );
    if let Err(e) = RecordStore::new(dir).save(&record) {
        warn!(error = %e, "failed to store detection record");
    }
}

fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  VoiceGuard v{} - Text Analysis", VERSION);
        println!("========================================");
    } else {
        println!("{}", "╔════════════════════════════════════════╗".bold());
        println!("{}", format!("║   VoiceGuard v{} - Text Analysis     ║", VERSION).bold());
        println!("{}", "╚════════════════════════════════════════╝".bold());
    }
    println!();
}

/// Print one score in the selected format
fn print_score(scored: &ScoreResult, args: &Args) -> ScanResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(scored)?);
    } else if args.verbose {
        print_verbose(scored);
    } else if args.no_color {
        println!("{}", scored.to_parseable_string());
    } else {
        let class = scored.classification();
        println!(
            "{} {} | score={:.1} | confidence={}%",
            class.emoji(),
            class.to_string().color(class.color()).bold(),
            scored.score,
            scored.confidence(),
        );
    }
    Ok(())
}

fn print_verbose(scored: &ScoreResult) {
    let class = scored.classification();
    let line = "├──────────────────────────────────────┤".color(class.color());

    println!("{}", "┌──────────────────────────────────────┐".color(class.color()));
    println!(
        "│ {} score={:.2}  confidence={}%",
        class.to_string().color(class.color()).bold(),
        scored.score,
        scored.confidence(),
    );
    println!(
        "│ {} words, {} sentences, {} chars",
        scored.word_count, scored.sentence_count, scored.char_count
    );
    println!("{}", line);
    println!("│ Signals:");
    for row in signal_rows(&scored.signals) {
        println!("│   {}", row);
    }
    println!("{}", line);
    for indicator in &scored.indicators {
        println!("│ {}", indicator);
    }
    println!("{}", "└──────────────────────────────────────┘".color(class.color()));
}

/// Signal values with the weight each one contributes to the score
fn signal_rows(s: &TextSignals) -> Vec<String> {
    vec![
        format!("repetition:     {:.4} (w=-{})", s.repetition_score, PENALTY_REPETITION),
        format!("ai_phrases:     {} (w=-{} each)", s.ai_pattern_count, PENALTY_AI_PHRASE),
        format!("complex_words:  {:.4} (w=-{})", s.complex_word_score, PENALTY_COMPLEX_WORDS),
        format!("formatting:     {} (-{})", s.has_consistent_formatting, PENALTY_CONSISTENT_FORMATTING),
        format!("punctuation:    {} (-{})", s.has_perfect_punctuation, PENALTY_PERFECT_PUNCTUATION),
        format!("variety:        {} (+{})", s.sentence_length_variety, BONUS_SENTENCE_VARIETY),
        format!("pronouns:       {} (+{})", s.has_personal_pronouns, BONUS_PERSONAL_PRONOUNS),
        format!("informal:       {} (+{})", s.has_informal_language, BONUS_INFORMAL_LANGUAGE),
        format!("emotional:      {} (+{})", s.has_emotional_expression, BONUS_EMOTIONAL_EXPRESSION),
        format!("contractions:   {} (+{})", s.has_contractions, BONUS_CONTRACTIONS),
        format!("transitions:    {} (+{})", s.has_natural_transitions, BONUS_NATURAL_TRANSITIONS),
    ]
}
