//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use coinjack::{Card, Controls, GameSession, GameView, RoundState, Suit};

/// Renders engine notifications straight to the terminal.
struct Terminal;

impl GameView for Terminal {
    fn on_hands_changed(&mut self, player: &[Card], dealer: &[Card], hole_revealed: bool) {
        if player.is_empty() && dealer.is_empty() {
            return;
        }
        println!("\nDealer: {}", format_dealer(dealer, hole_revealed));
        println!("You:    {}", format_cards(player));
    }

    fn on_scores_changed(&mut self, player_score: u8, dealer_score: u8) {
        if player_score > 0 {
            println!("Scores: you {player_score}, dealer {dealer_score}");
        }
    }

    fn on_status_message(&mut self, text: &str) {
        if !text.is_empty() {
            println!("** {text} **");
        }
    }

    fn on_coins_changed(&mut self, quarters: u32, dimes: u32, nickels: u32, total_cents: u32) {
        println!(
            "Purse: {quarters} quarters, {dimes} dimes, {nickels} nickels (${}.{:02})",
            total_cents / 100,
            total_cents % 100
        );
    }

    fn on_controls_changed(&mut self, _controls: Controls) {}
}

fn main() {
    println!("Coin blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = GameSession::new(Terminal, seed);
    session.sync_view();

    loop {
        match session.state() {
            RoundState::AwaitingWager => {
                let Some(cents) = prompt_u32("Wager in cents (multiple of 5, 0 to quit): ") else {
                    break;
                };

                if cents == 0 {
                    println!("Goodbye.");
                    break;
                }

                if let Err(err) = session.place_wager(cents) {
                    println!("Wager error: {err}");
                }
            }
            RoundState::PlayerTurn => match prompt_line("Action ([h]it / [s]tand): ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = session.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = session.stand() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            },
            RoundState::DealerTurn => {
                // The dealer plays out synchronously inside stand().
            }
            RoundState::Settled => {
                let input = prompt_line("Press Enter for the next round (q to quit): ");
                if input == "q" || input == "quit" {
                    return;
                }
                if let Err(err) = session.start_new_round() {
                    println!("Round error: {err}");
                }
            }
        }
    }
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

fn prompt_u32(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_dealer(cards: &[Card], hole_revealed: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    if hole_revealed {
        format_cards(cards)
    } else {
        let mut parts = Vec::new();
        if let Some(card) = cards.first() {
            parts.push(format_card(card));
        }
        if cards.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
