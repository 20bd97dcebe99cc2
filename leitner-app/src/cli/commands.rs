use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::seed::load_deck;

use anyhow::Result;
use leitner_core::{filter_by_tag, filter_by_text, Card, Difficulty, Engine, ProgressStats};
use std::io::{stdin, stdout, Write};
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let deck = load_deck(args.deck.as_deref())?;
    let engine = Arc::new(Engine::new(deck));

    match args.cmd {
        Command::Serve(cmd) => {
            let addr: std::net::SocketAddr = cmd.addr.parse()?;
            api_server::run(engine, addr).await
        }
        Command::Practice(cmd) => practice_cmd(&engine, cmd),
        Command::Cards(cmd) => cards_cmd(&engine, cmd),
    }
}

enum Answer {
    Graded(Difficulty),
    Skip,
    Quit,
}

fn practice_cmd(engine: &Engine, cmd: PracticeCmd) -> Result<()> {
    'days: for n in 0..cmd.days {
        if n > 0 {
            engine.advance_day();
        }
        let practice = engine.select_due();
        println!("\n=== day {} ===", practice.day);
        if practice.retired {
            println!("every card is retired");
            break;
        }
        if practice.cards.is_empty() {
            println!("no cards due");
            continue;
        }

        let total = practice.cards.len();
        for (i, card) in practice.cards.iter().enumerate() {
            println!("\n[{}/{}] Q: {}", i + 1, total, card.front);
            match ask(engine, card)? {
                Answer::Graded(d) => {
                    let out = engine.advance_card(card, d)?;
                    match out.review.next_bucket {
                        Some(b) => println!("→ bucket {}", b),
                        None => println!("→ retired"),
                    }
                }
                Answer::Skip => {}
                Answer::Quit => break 'days,
            }
        }
    }

    print_progress(&engine.compute_progress());
    Ok(())
}

fn ask(engine: &Engine, card: &Card) -> Result<Answer> {
    if !prompt_enter("[enter=show]")? {
        return Ok(Answer::Quit);
    }
    println!("A: {}", card.back);
    println!("[w=wrong, h=hard, e=easy, ?=hint, s=skip, q=quit]");
    loop {
        let Some(line) = read_line("difficulty> ")? else {
            return Ok(Answer::Quit);
        };
        match line.trim().to_lowercase().as_str() {
            "?" => println!("hint: {}", engine.get_hint(card)),
            "s" | "skip" => return Ok(Answer::Skip),
            "q" | "quit" => return Ok(Answer::Quit),
            other => match other.parse::<Difficulty>() {
                Ok(d) => return Ok(Answer::Graded(d)),
                Err(_) => println!("enter w/h/e, ?, s, or q"),
            },
        }
    }
}

fn cards_cmd(engine: &Engine, cmd: CardsCmd) -> Result<()> {
    let deck = engine.deck();
    let mut cards: Vec<&Card> = match &cmd.tag {
        Some(tag) => filter_by_tag(&deck, tag),
        None => deck.iter().collect(),
    };
    if let Some(q) = &cmd.query {
        cards = filter_by_text(cards, q);
    }
    for c in cards {
        let tags = if c.tags.is_empty() {
            "-".to_string()
        } else {
            c.tags.iter().cloned().collect::<Vec<_>>().join(";")
        };
        let bucket = engine
            .find_card_bucket(c)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "retired".to_string());
        println!("{}\t{}\tbucket={}\ttags={}", c.front, c.back, bucket, tags);
    }
    Ok(())
}

fn print_progress(p: &ProgressStats) {
    println!("\nactive cards: {}", p.total_flashcards);
    for (bucket, count) in &p.bucket_distribution {
        let reviewed = p.reviews_per_bucket.get(bucket).copied().unwrap_or(0);
        println!("  bucket {bucket}: {count} card(s), {reviewed} review(s)");
    }
    println!(
        "reviews: {} (accuracy {:.0}%)",
        p.outcomes.total,
        p.accuracy_rate * 100.0
    );
}

// ===== Helpers =====
/// `false` on end of input.
fn prompt_enter(label: &str) -> Result<bool> {
    Ok(read_line(label)?.is_some())
}

fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    if stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}
