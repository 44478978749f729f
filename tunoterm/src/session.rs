use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use tracing::debug;

use tuno::card::Card;
use tuno::constants::{MAX_PLAYERS, MIN_PLAYERS};
use tuno::error::GameError;
use tuno::game::Game;
use tuno::ring::Seat;
use tuno::turn::{PlayAction, TurnAction, TurnOutcome, TurnPhase, TurnReport};

use crate::input::{self, CardRequest, Command};

// Returns when somebody wins, the player types `exit`, or the input stream
// runs out.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Starting the game...")?;

    let Some(names) = gather_players(input, out)? else {
        return Ok(());
    };
    let mut game = match Game::new(names) {
        Ok(game) => game,
        Err(error) => {
            writeln!(out, "Could not start the game: {error}.")?;
            return Ok(());
        }
    };
    debug!(players = game.players().len(), "match started");

    writeln!(out, "\nGame Started")?;

    loop {
        match game.phase() {
            TurnPhase::GameOver { winner } => {
                writeln!(out, "Player {} wins the game!", seat_name(&game, winner))?;
                return Ok(());
            }
            TurnPhase::DrawPending { drawn } => {
                if !decide_drawn_card(input, out, &mut game, drawn)? {
                    return Ok(());
                }
            }
            TurnPhase::AwaitingAction => {
                if !take_turn(input, out, &mut game)? {
                    return Ok(());
                }
            }
        }
    }
}

fn gather_players<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<Vec<String>>> {
    let count = loop {
        let text = format!("Enter number of players (between {MIN_PLAYERS} and {MAX_PLAYERS}): ");
        let Some(answer) = input::prompt(input, out, &text)? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => break count,
            Ok(_) => writeln!(
                out,
                "Invalid number of players. Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."
            )?,
            Err(_) => writeln!(out, "Invalid input. Please enter a valid number.")?,
        }
    };

    let mut names = Vec::with_capacity(count);
    for index in 0..count {
        loop {
            let text = format!("Enter player {}'s name: ", index + 1);
            let Some(name) = input::prompt(input, out, &text)? else {
                return Ok(None);
            };
            if name.is_empty() {
                writeln!(out, "A name cannot be empty.")?;
                continue;
            }
            names.push(name);
            break;
        }
    }
    Ok(Some(names))
}

// False means the match should end without a winner.
fn take_turn<R: BufRead, W: Write>(input: &mut R, out: &mut W, game: &mut Game) -> Result<bool> {
    writeln!(out, "\nTop card on the pile: {}", game.top_card())?;
    writeln!(out, "Next player: {}", seat_name(game, game.next_seat()))?;
    render_hand(out, game)?;

    loop {
        let Some(line) = input::prompt(
            input,
            out,
            "Choose a card to play (enter color and type) or type 'Draw' to draw a card or 'Exit': ",
        )?
        else {
            return Ok(false);
        };
        let Some(command) = input::parse_command(&line) else {
            writeln!(out, "Invalid input. Try again.")?;
            continue;
        };

        match command {
            Command::Exit => {
                debug!("player left the match");
                writeln!(out, "Exiting the game...")?;
                return Ok(false);
            }
            Command::Draw => {
                let report = game.play_turn(TurnAction::Draw)?;
                render_report(out, game, &report)?;
                return Ok(true);
            }
            Command::Play(request) => {
                let Some(action) = play_action_for(input, out, request)? else {
                    return Ok(false);
                };
                match game.play_turn(TurnAction::Play(action)) {
                    Ok(report) => {
                        render_report(out, game, &report)?;
                        return Ok(true);
                    }
                    Err(GameError::CardNotInHand) => {
                        writeln!(out, "You do not have that card in your hand!")?;
                    }
                    Err(GameError::IllegalMove) => {
                        writeln!(out, "Invalid move. Try again.")?;
                    }
                    Err(error) => return Err(error.into()),
                }
            }
        }
    }
}

fn decide_drawn_card<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    game: &mut Game,
    drawn: Card,
) -> Result<bool> {
    let Some(play_it) = input::confirm(input, out, "Do you want to play the card? [Y/N]: ")? else {
        return Ok(false);
    };

    if !play_it {
        let report = game.play_turn(TurnAction::Pass)?;
        render_report(out, game, &report)?;
        return Ok(true);
    }

    let request = match drawn {
        Card::Colored(color, face) => CardRequest::Colored(color, face),
        Card::Wild => CardRequest::Wild,
        Card::WildDrawFour => CardRequest::WildDrawFour,
    };
    let Some(action) = play_action_for(input, out, request)? else {
        return Ok(false);
    };
    let report = game.play_turn(TurnAction::Play(action))?;
    render_report(out, game, &report)?;
    Ok(true)
}

// None means the input stream ran out before the color was chosen.
fn play_action_for<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    request: CardRequest,
) -> Result<Option<PlayAction>> {
    let action = match request {
        CardRequest::Colored(color, face) => PlayAction::Colored(color, face),
        CardRequest::Wild => match input::choose_color(input, out)? {
            Some(color) => PlayAction::Wild(color),
            None => return Ok(None),
        },
        CardRequest::WildDrawFour => match input::choose_color(input, out)? {
            Some(color) => PlayAction::WildDrawFour(color),
            None => return Ok(None),
        },
    };
    Ok(Some(action))
}

fn render_hand<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    let player = game.current_player();
    writeln!(out, "\nHand of {}:", player.name())?;
    for card in &player.hand {
        writeln!(out, "{card}")?;
    }
    Ok(())
}

fn render_report<W: Write>(out: &mut W, game: &Game, report: &TurnReport) -> Result<()> {
    let actor = seat_name(game, report.actor);
    match &report.outcome {
        TurnOutcome::Played { card } => {
            writeln!(out, "Player {actor} played {card}")?;
        }
        TurnOutcome::Skipped { card, skipped } => {
            writeln!(out, "Player {actor} played {card}")?;
            writeln!(out, "Skipping {}'s turn.", seat_name(game, *skipped))?;
        }
        TurnOutcome::Reversed { card } => {
            writeln!(out, "Player {actor} played {card}")?;
            writeln!(out, "Play direction reversed.")?;
        }
        TurnOutcome::Penalized {
            card,
            target,
            drawn,
        } => {
            writeln!(out, "Player {actor} played {card}")?;
            writeln!(
                out,
                "Player {} drew the following cards:",
                seat_name(game, *target)
            )?;
            for card in drawn {
                writeln!(out, "{card}")?;
            }
            writeln!(out, "Skipping {}'s turn.", seat_name(game, *target))?;
        }
        TurnOutcome::Drew { card, playable } => {
            writeln!(out, "Player {actor} drew a card.")?;
            writeln!(out, "{card}")?;
            if !playable {
                writeln!(out, "Card is not playable.")?;
            }
        }
        TurnOutcome::NothingToDraw => {
            writeln!(out, "Nothing left to draw. The turn passes.")?;
        }
        TurnOutcome::Passed => {
            writeln!(out, "Card was not played.")?;
        }
    }
    Ok(())
}

fn seat_name(game: &Game, seat: Seat) -> String {
    game.player(seat)
        .map(|player| player.name().to_string())
        .unwrap_or_else(|| format!("#{seat}"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_returns_to_the_caller() {
        let output = run_script("2\nAlice\nBob\nexit\n");

        assert!(output.contains("Game Started"));
        assert!(output.contains("Hand of Alice:"));
        assert!(output.contains("Top card on the pile: ["));
        assert!(output.contains("Next player: Bob"));
        assert!(output.contains("Exiting the game..."));
    }

    #[test]
    fn player_count_is_validated_before_names() {
        let output = run_script("1\neleven\n11\n2\nAlice\nBob\nexit\n");

        assert!(output.contains("Invalid number of players."));
        assert!(output.contains("Invalid input. Please enter a valid number."));
        assert!(output.contains("Hand of Alice:"));
    }

    #[test]
    fn blank_names_are_rejected() {
        let output = run_script("2\n\nAlice\nBob\nexit\n");

        assert!(output.contains("A name cannot be empty."));
        assert!(output.contains("Hand of Alice:"));
    }

    #[test]
    fn unparseable_commands_reprompt() {
        let output = run_script("2\nAlice\nBob\npurple 4\nexit\n");

        assert!(output.contains("Invalid input. Try again."));
        assert!(output.contains("Exiting the game..."));
    }

    #[test]
    fn drawing_a_card_is_narrated() {
        // After the draw the turn either passes or waits on a Y/N choice,
        // so the script covers both with a refusal before exiting.
        let output = run_script("2\nAlice\nBob\ndraw\nn\nexit\n");

        assert!(output.contains("Player Alice drew a card."));
    }

    #[test]
    fn exhausted_input_ends_the_session() {
        let output = run_script("2\nAlice\nBob\n");

        assert!(output.contains("Hand of Alice:"));
    }
}
