pub mod decision;
pub mod layout;
pub mod scenario;
pub mod screen;
pub mod sequence;

use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info};

use screen::{GameScreen, InputEvent, Key, Screen};

// ---------------------------------------------------------------------------
// Player input
// ---------------------------------------------------------------------------

enum Command {
    Event(InputEvent),
    Quit,
    Invalid,
}

/// `1`/`2` pick an option, an empty line is the Enter key.
fn parse_command(line: &str, options: usize) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Event(InputEvent::Key(Key::Enter));
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Command::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Command::Event(InputEvent::Select(n - 1)),
        _ => Command::Invalid,
    }
}

/// Read one line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

// ---------------------------------------------------------------------------
// Game over screen
// ---------------------------------------------------------------------------

fn show_game_over(game: &GameScreen, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n========================================")?;
    writeln!(out, "             GAME OVER")?;
    writeln!(out, "========================================")?;

    match game.screen() {
        Screen::Win => writeln!(out, "  Result: WIN - The puppy is happy and safe!")?,
        Screen::Lose => writeln!(out, "  Result: LOSE - The puppy ran away.")?,
        Screen::Game => writeln!(out, "  You walked away from the puppy.")?,
    }
    match game.final_score() {
        Some(score) => writeln!(
            out,
            "  Score:  {} / {} good choices",
            score,
            game.state().total
        )?,
        None if game.screen() != Screen::Game => writeln!(out, "  Fate decided this one.")?,
        None => {}
    }

    writeln!(out, "========================================\n")?;
    writeln!(out, "  [r] Restart    [q] Quit\n")?;
    Ok(())
}

/// Read the player's post-game choice. Returns `true` to restart, `false` to quit.
fn prompt_restart(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match line.trim().to_lowercase().as_str() {
            "r" => return Ok(true),
            "q" => return Ok(false),
            _ => writeln!(out, "  Press [r] to restart or [q] to quit.")?,
        }
    }
}

// ---------------------------------------------------------------------------
// Single playthrough
// ---------------------------------------------------------------------------

/// Returns `false` if the player quit (or input ended) before an outcome.
fn play_round(
    game: &mut GameScreen,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    info!("Round started: {}", game.score_line());

    while game.screen() == Screen::Game {
        let decision = game.current()?;
        writeln!(out, "\n{:>40}", game.score_line())?;
        writeln!(out, "{}", decision.prompt)?;
        for (i, option) in decision.options.iter().enumerate() {
            writeln!(out, "  [{}] {}", i + 1, option.label)?;
        }
        let options = decision.options.len();

        write!(out, "\n> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        match parse_command(&line, options) {
            Command::Event(event) => {
                let next = game.handle(event)?;
                debug!("Event {event:?} -> {next:?}");
            }
            Command::Quit => return Ok(false),
            Command::Invalid => {
                writeln!(out, "(Type 1-{options}, Enter for fate, or quit.)")?;
            }
        }
    }

    Ok(true)
}

// ---------------------------------------------------------------------------
// Public entry point — runs rounds in a loop until the player quits
// ---------------------------------------------------------------------------

pub fn run(game: &mut GameScreen, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        writeln!(out, "\n========================================")?;
        writeln!(out, "   {}", game.title().to_uppercase())?;
        writeln!(out, "========================================")?;
        writeln!(out, "Make good choices for the puppy.")?;
        writeln!(out, "Press Enter on an empty line to leave it to fate.")?;

        let finished = play_round(game, input, out)?;
        show_game_over(game, out)?;

        if !finished || !prompt_restart(input, out)? {
            writeln!(out, "Thanks for playing!")?;
            break;
        }

        game.restart();
        info!("Player chose to restart");
    }

    Ok(())
}
