//! CLI blackjack with a live High-Low count.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcount::{Card, Game, GameOptions, GameState, Hand, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack counting trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let bankroll = game.bankroll();
        if bankroll < 0.01 {
            println!("You are out of money. Game over.");
            break;
        }

        println!(
            "\nShoe: {} cards | running count {:+} | true count {:+.2}",
            game.cards_remaining(),
            game.running_count(),
            game.true_count()
        );

        let Some(bet) = prompt_amount(&format!("Bet amount (bankroll {bankroll:.2}, 0 to quit): "))
        else {
            break;
        };

        if bet == 0.0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while let GameState::InRound { acting } = game.state() {
            print_table(&game, false);

            println!("{}", format_actions(&game));
            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action on hand {}.", acting + 1);
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game, true);
        if let Some(result) = game.result() {
            print!("{result}");
            println!("Net {:+.2}, bankroll {:.2}", result.net, game.bankroll());
        }

        game.new_round();
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

fn prompt_amount(prompt: &str) -> Option<f64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<f64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, reveal: bool) {
    let dealer = game.dealer_hand();
    if reveal {
        println!(
            "\nDealer: {} (value {})",
            format_hand(dealer),
            dealer.value()
        );
    } else {
        let up = dealer.up_card().map_or_else(|| "(none)".to_string(), format_card);
        println!("\nDealer: {up} ??");
    }

    let acting = game.acting_index();
    for (index, seat) in game.seats().iter().enumerate() {
        let marker = if acting == Some(index) { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet {:.2}",
            marker,
            index + 1,
            format_hand(&seat.hand),
            seat.hand.value(),
            seat.bet
        );
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double()),
        format_action("split", "p", game.can_split()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
