//! CLI blackjack example.
//!
//! Every action rebuilds the game from a JSON session and stores it again
//! afterwards, the same way a web front-end handles one request at a time.
//! Set `RUST_LOG=bjsession=debug` to watch the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsession::{
    Card, CardView, Game, GameOptions, GameState, RoundOutcome, Session, SessionError, Snapshot,
    Suit,
};
use tracing_subscriber::EnvFilter;

/// In-memory stand-in for a session store.
struct SessionStore {
    json: String,
    options: GameOptions,
    seed: u64,
}

impl SessionStore {
    fn new(options: GameOptions, seed: u64) -> Result<Self, SessionError> {
        let json = Game::new(options, seed).to_session().to_json()?;
        Ok(Self {
            json,
            options,
            seed,
        })
    }

    fn load(&mut self) -> Result<Game, SessionError> {
        self.seed = self.seed.wrapping_add(1);
        let session = Session::from_json(&self.json)?;
        Game::from_session(session, self.options, self.seed)
    }

    fn save(&mut self, game: &Game) -> Result<(), SessionError> {
        self.json = game.to_session().to_json()?;
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    if let Err(err) = run() {
        println!("Session error: {err}");
    }
}

fn run() -> Result<(), SessionError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_persist_shoe(true);
    let mut store = SessionStore::new(options, seed)?;

    loop {
        let mut game = store.load()?;
        let balance = game.balance();

        if game.is_bankrupt() {
            println!("You are out of money. Game over.");
            break;
        }

        println!("\nBalance: {balance}");
        let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        let mut snapshot = match game.start_round(bet) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };
        store.save(&game)?;
        let mut outcome = game.last_result().map(|result| result.outcome);

        while snapshot.game_state == GameState::Playing {
            print_table(&snapshot);

            let action = prompt_line("[h]it or [s]tand: ");
            let mut game = store.load()?;

            let result = match action.as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return Ok(()),
                _ => {
                    println!("Please enter h or s.");
                    continue;
                }
            };

            match result {
                Ok(next) => {
                    store.save(&game)?;
                    outcome = game.last_result().map(|result| result.outcome);
                    snapshot = next;
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&snapshot);
        let color_code = match outcome {
            Some(outcome) if outcome.is_player_win() => "1;32",
            Some(RoundOutcome::Push) => "1;33",
            _ => "1;31",
        };
        println!("{}", colorize(&snapshot.message, color_code));
    }

    let game = store.load()?;
    println!("Final balance: {}", game.balance());
    Ok(())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    let dealer = snapshot
        .dealer_cards
        .iter()
        .map(|view| match view {
            CardView::Hidden => "??".to_string(),
            CardView::Face(card) => format_card(card),
        })
        .collect::<Vec<_>>()
        .join(" ");
    let dealer_value = snapshot
        .dealer_value
        .map_or_else(|| "?".to_string(), |value| value.to_string());
    println!("\nDealer: {dealer} (value {dealer_value})");

    let player = snapshot
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "You:    {player} (value {}) | bet {}",
        snapshot.player_value, snapshot.current_bet
    );
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
