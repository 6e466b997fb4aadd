//! Interactive menu shell (default binary).
//!
//! A thin line-oriented driver around the exchange engine: it renders the
//! containers, reads one menu option per iteration, invokes the matching
//! engine entry point, and reports the structured outcome. All game rules
//! live in the engine; this file only formats text.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use tetris_stack::core::PieceSource;
use tetris_stack::engine::{ExchangeEngine, ExchangeError};
use tetris_stack::types::Piece;

const RULE: &str = "===========================================================";

fn main() -> Result<()> {
    let mut engine = ExchangeEngine::new(PieceSource::from_clock());

    println!("{RULE}");
    println!("{}", "            TETRIS STACK - PIECE SUPPLY".bold());
    println!("{RULE}");
    println!();
    println!("[+] System initialized!");
    println!("[+] Queue: {} pieces", engine.queue().len());
    println!(
        "[+] Reserve: {}/{} slots used",
        engine.reserve().len(),
        engine.reserve().capacity()
    );

    print_state(&engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed, treat like quit
        };

        println!();
        match line.trim() {
            "1" => {
                dispatch(engine.play_front().map(|outcome| {
                    format!(
                        "Piece {} played!\n[+] New piece {} added to the queue.",
                        outcome.played, outcome.refill
                    )
                }));
                print_state(&engine);
            }
            "2" => {
                dispatch(engine.move_front_to_reserve().map(|outcome| {
                    format!(
                        "Piece {} moved to the reserve!\n[+] New piece {} added to the queue.",
                        outcome.reserved, outcome.refill
                    )
                }));
                print_state(&engine);
            }
            "3" => {
                dispatch(
                    engine
                        .pop_reserved()
                        .map(|piece| format!("Reserved piece {piece} used!")),
                );
                print_state(&engine);
            }
            "4" => {
                dispatch(engine.swap_front_top().map(|outcome| {
                    format!(
                        "Single swap done!\n[+] Queue front: {} <- {}\n[+] Reserve top: {} <- {}",
                        outcome.to_reserve, outcome.to_queue, outcome.to_queue, outcome.to_reserve
                    )
                }));
                print_state(&engine);
            }
            "5" => {
                dispatch(engine.swap_three_block().map(|outcome| {
                    format!(
                        "Triple swap done!\n[+] Queue received: {}\n[+] Reserve received: {}",
                        format_row(&outcome.to_queue),
                        format_row(&outcome.to_reserve)
                    )
                }));
                print_state(&engine);
            }
            "0" => break,
            other => {
                println!(
                    "{}",
                    format!("[!] Invalid option '{other}'! Try again.").red()
                );
            }
        }
    }

    println!("{RULE}");
    println!("            Leaving Tetris Stack...");
    println!("{RULE}");
    Ok(())
}

fn dispatch(result: Result<String, ExchangeError>) {
    println!("{RULE}");
    match result {
        Ok(report) => println!("[+] {}", report.green()),
        Err(err) => println!("{}", format!("[!] {err}").red()),
    }
    println!("{RULE}");
}

fn format_row(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "(empty)".to_string();
    }
    pieces
        .iter()
        .map(Piece::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_state(engine: &ExchangeEngine) {
    let queue = engine.queue();
    let reserve = engine.reserve();

    println!();
    println!("{RULE}");
    println!("                    CURRENT STATE");
    println!("{RULE}");
    println!();
    println!("Piece queue: {}", format_row(&queue.front_to_back()).cyan());
    println!(
        "Reserve (top -> bottom): {}",
        format_row(&reserve.top_to_bottom()).yellow()
    );
    println!();
    println!("Pieces in queue: {}/{}", queue.len(), queue.capacity());
    println!("Pieces in reserve: {}/{}", reserve.len(), reserve.capacity());
    println!("{RULE}");
}

fn print_menu() {
    println!();
    println!("-----------------------------------------------------------");
    println!("                    AVAILABLE OPTIONS");
    println!("-----------------------------------------------------------");
    println!("1 - Play the piece at the front of the queue");
    println!("2 - Move the front piece to the reserve stack");
    println!("3 - Use a piece from the reserve stack");
    println!("4 - Swap the queue front with the reserve top");
    println!("5 - Swap the first 3 queue pieces with the 3 reserve pieces");
    println!("0 - Quit");
    println!("-----------------------------------------------------------");
    print!("Choose an option: ");
}
