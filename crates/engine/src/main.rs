//! MentorPlay Engine - Main entry point.
//!
//! `mentorplay-engine <input-path> <game-kind>` turns one Koivetz file
//! into a playable game: it generates the structured content, prints the
//! mentor key and a summary of the playable material, and emits the share
//! fragment.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mentorplay_domain::{
    encode_fragment, CrosswordClue, CrosswordLayout, Direction, GameData, GameKind, GamePayload,
    WordSearchGrid,
};
use mentorplay_engine::{
    credentials, GeminiClient, GenerationError, GenerationService, ResilientGenerationClient,
    RetryConfig, SourcePayload,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentorplay_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (input_path, kind) = parse_args()?;

    let source = read_source(&input_path)?;

    let api_key = match credentials::resolve_credential(&credentials::default_sources()) {
        Ok(key) => key,
        Err(GenerationError::NoCredential) => anyhow::bail!(
            "No API key found. Set GEMINI_API_KEY (or the legacy API_KEY), \
             or point MENTORPLAY_KEY_FILE at a file containing the key."
        ),
        Err(error) => return Err(error.into()),
    };

    // Create the generation stack
    let client = Arc::new(GeminiClient::from_env(&api_key));
    let retry_config = RetryConfig::default();
    tracing::info!(
        "Generation client configured with retry: max_attempts={}, delay_ms={}",
        retry_config.max_attempts,
        retry_config.delay_ms
    );
    let resilient = Arc::new(ResilientGenerationClient::new(client, retry_config));
    let service = GenerationService::new(resilient);

    let game = match service.generate_game(kind, source).await {
        Ok(game) => game,
        Err(error @ (GenerationError::NoCredential | GenerationError::InvalidCredential(_))) => {
            anyhow::bail!(
                "{error}. Check GEMINI_API_KEY (or the legacy API_KEY), \
                 or the file named by MENTORPLAY_KEY_FILE."
            )
        }
        Err(error) => return Err(error.into()),
    };

    tracing::info!(title = %game.title, kind = %game.kind, "game generated");

    print_game(&game)?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn parse_args() -> anyhow::Result<(PathBuf, GameKind)> {
    const USAGE: &str = "usage: mentorplay-engine <input-path> <game-kind>";

    let mut args = std::env::args().skip(1);
    let input = args.next().context(USAGE)?;
    let kind_tag = args.next().context(USAGE)?;
    let kind: GameKind = kind_tag.parse()?;
    Ok((PathBuf::from(input), kind))
}

/// Read the Koivetz file: PDFs travel as base64 inline data, everything
/// else is treated as UTF-8 text.
fn read_source(path: &Path) -> anyhow::Result<SourcePayload> {
    let is_pdf = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        Ok(SourcePayload::Binary {
            data: STANDARD.encode(bytes),
            media_type: "application/pdf".to_string(),
        })
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(SourcePayload::Text(text))
    }
}

fn print_game(game: &GameData) -> anyhow::Result<()> {
    println!("\n{}", game.title);
    println!("{}", game.instructions);

    println!("\nMentor key:");
    for point in &game.mentor_key {
        println!("  - {point}");
    }

    print_summary(game)?;

    let fragment = encode_fragment(game)?;
    println!("\nShare fragment:\n{fragment}");

    Ok(())
}

fn print_summary(game: &GameData) -> anyhow::Result<()> {
    println!();
    match game.payload()? {
        GamePayload::Quiz(items) | GamePayload::TrueFalse(items) => {
            println!("{} questions ready to play.", items.len());
        }
        GamePayload::Matching(pairs) => println!("{} pairs to match.", pairs.len()),
        GamePayload::Memory(pairs) => {
            println!("{} pairs dealt as {} cards.", pairs.len(), pairs.len() * 2);
        }
        GamePayload::Sequence(items) => println!("{} segments to arrange.", items.len()),
        GamePayload::Sorting(content) => println!(
            "{} items across {} categories.",
            content.items.len(),
            content.categories.len()
        ),
        GamePayload::Unscramble(items) => println!("{} words to unscramble.", items.len()),
        GamePayload::FillBlank(content) => {
            println!("{} blanks to fill.", content.missing_words.len());
        }
        GamePayload::Riddle(items) => println!("{} riddles to solve.", items.len()),
        GamePayload::EmojiChallenge(items) => println!("{} emoji challenges.", items.len()),
        GamePayload::TriviaTrail(items) => println!("{} steps on the trail.", items.len()),
        GamePayload::FindMatch(terms) => {
            println!("{} terms in the find-match pool.", terms.len());
        }
        GamePayload::WordSearch(words) => print_word_search(&words),
        GamePayload::Crossword(clues) => print_crossword(&clues),
    }
    Ok(())
}

fn print_word_search(words: &[String]) {
    let grid = WordSearchGrid::generate(words, &mut rand::thread_rng());
    println!(
        "{}x{} grid with {} words hidden.",
        grid.size(),
        grid.size(),
        grid.placed().len()
    );
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        println!("  {}", line.join(" "));
    }
    for word in grid.dropped() {
        tracing::warn!(word = %word, "word did not fit the grid");
    }
}

fn print_crossword(clues: &[CrosswordClue]) {
    let layout = CrosswordLayout::generate(clues);
    println!(
        "{}x{} crossword with {} words placed.",
        layout.rows(),
        layout.cols(),
        layout.entries().len()
    );
    for row in 0..layout.rows() {
        let mut line = String::new();
        for col in 0..layout.cols() {
            line.push(layout.letter(row, col).unwrap_or('.'));
            line.push(' ');
        }
        println!("  {}", line.trim_end());
    }
    for entry in layout.entries() {
        let number = layout.start_number(entry.row(), entry.col()).unwrap_or(0);
        let direction = match entry.direction() {
            Direction::Across => "Across",
            Direction::Down => "Down",
        };
        println!("  {number} {direction}: {}", entry.clue());
    }
    for clue in layout.dropped() {
        tracing::warn!(word = %clue.word, "clue did not fit the crossword");
    }
}
