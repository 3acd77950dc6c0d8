//! Hot-seat terminal demo: one full Imposter round at a single keyboard.
//!
//! Player names come from the command line (three defaults otherwise).
//! Uses the Gemini provider when `GEMINI_API_KEY` is set; without it, a
//! small built-in word pantry keeps the demo fully offline.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use imposter::prelude::*;
use imposter::{GeneratedRound, RoundRequest, SessionError};

// ---------------------------------------------------------------------------
// Offline provider
// ---------------------------------------------------------------------------

/// A tiny offline word pantry, a few entries per category.
const PANTRY: &[(&str, &[(&str, &str)])] = &[
    (
        "Sports",
        &[
            ("Basketball", "Orange bounce"),
            ("Curling", "Ice brooms"),
            ("Fencing", "Polite swordplay"),
        ],
    ),
    (
        "Foods",
        &[
            ("Ramen", "Late slurp"),
            ("Tiramisu", "Coffee layers"),
            ("Pretzel", "Knotted dough"),
        ],
    ),
    (
        "Animals",
        &[
            ("Otter", "River acrobat"),
            ("Axolotl", "Smiling gills"),
            ("Peacock", "Proud fan"),
        ],
    ),
];

/// Serves pantry words, skipping ones the session has already used.
struct PantrySource;

impl RoundSource for PantrySource {
    type Error = std::convert::Infallible;

    async fn generate(&self, request: &RoundRequest) -> Result<GeneratedRound, Self::Error> {
        let label = request.category.label();
        let shelf = PANTRY
            .iter()
            .find(|(category, _)| *category == label)
            .map(|(_, words)| *words)
            .unwrap_or(PANTRY[0].1);

        // First word not in the dedup list; cycle once the shelf runs dry.
        let (word, hint) = shelf
            .iter()
            .find(|(word, _)| !request.recent_words.iter().any(|used| used == word))
            .copied()
            .unwrap_or(shelf[request.recent_words.len() % shelf.len()]);

        Ok(GeneratedRound {
            secret_word: word.to_string(),
            category: label.to_string(),
            hint: hint.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Demo flow
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["Ann".into(), "Bo".into(), "Cy".into()];
    }

    let (handle, settings) = match std::env::var("GEMINI_API_KEY") {
        Ok(key) => (spawn_session(GeminiRoundSource::new(key)), Settings::default()),
        Err(_) => {
            println!("GEMINI_API_KEY not set — using the built-in word pantry.");
            let settings = Settings {
                enabled_categories: BTreeSet::from([
                    Category::Sports,
                    Category::Foods,
                    Category::Animals,
                ]),
                ..Settings::default()
            };
            (spawn_session(PantrySource), settings)
        }
    };

    handle.start_game(names, settings).await?;
    let view = handle.view().await?;
    let round = view.round.clone().expect("distribution always has a round");

    println!("\n=== Role distribution — pass the keyboard around ===");
    for player in &view.players {
        wait(&format!("{}: press Enter to see your card...", player.name));
        if player.is_imposter {
            println!("  You are the IMPOSTER. Blend in!");
            if view.settings.reveal_category_to_imposter {
                println!("  Category: {}", round.category);
            }
            if view.settings.reveal_hint_to_imposter {
                println!("  Hint: {}", round.hint);
            }
        } else {
            println!("  Secret word: {}  (category: {})", round.secret_word, round.category);
        }
        wait("Press Enter to hide your card and pass on...");
        print!("\x1B[2J\x1B[1;1H"); // clear the terminal between cards
        io::stdout().flush().ok();

        handle.mark_player_viewed(player.id).await?;
    }

    println!("=== Discussion — find the imposter ===");
    wait("Press Enter when the table is ready to reveal...");
    let stats = handle.reveal().await?;

    let view = handle.view().await?;
    println!("\n=== Reveal ===");
    println!("The word was: {} ({})", round.secret_word, round.category);
    for player in view.players.iter().filter(|p| p.is_imposter) {
        println!("{} was an imposter!", player.name);
    }
    println!(
        "The table discussed for {} seconds.",
        stats.discussion_duration_seconds
    );

    handle.shutdown().await?;
    Ok(())
}

/// Prints a prompt and blocks until Enter.
fn wait(message: &str) {
    println!("{message}");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok();
}
