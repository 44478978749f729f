use std::io::{BufRead, Write};
use std::str::FromStr;

use color_eyre::eyre::Result;
use strum::IntoEnumIterator;
use tuno::card::{CardColor, Face};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(CardRequest),
    Draw,
    Exit,
}

// Wilds still need a color choice before they can go to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRequest {
    Colored(CardColor, Face),
    Wild,
    WildDrawFour,
}

// None means the input stream is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

// Turn commands are `draw`, `exit`, or a card as `<color> <rank>`: the four
// colors plus `special` for wilds, ranks 0-9, `skip`, `reverse`, `draw`,
// `wild` and `wilddraw`. Case does not matter.
pub fn parse_command(line: &str) -> Option<Command> {
    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();

    let command = match words.next()? {
        "draw" => Command::Draw,
        "exit" => Command::Exit,
        "special" => match words.next()? {
            "wild" => Command::Play(CardRequest::Wild),
            "wilddraw" => Command::Play(CardRequest::WildDrawFour),
            _ => return None,
        },
        color => {
            let color = CardColor::from_str(color).ok()?;
            let face = parse_face(words.next()?)?;
            Command::Play(CardRequest::Colored(color, face))
        }
    };

    // Trailing junk is a typo, not a command.
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn parse_face(word: &str) -> Option<Face> {
    match word {
        "skip" => Some(Face::Skip),
        "reverse" => Some(Face::Reverse),
        "draw" => Some(Face::DrawTwo),
        _ => {
            let number: u8 = word.parse().ok()?;
            (number <= 9).then_some(Face::Number(number))
        }
    }
}

pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<bool>> {
    loop {
        let Some(answer) = prompt(input, out, text)? else {
            return Ok(None);
        };
        match answer.to_lowercase().as_str() {
            "y" => return Ok(Some(true)),
            "n" => return Ok(Some(false)),
            _ => writeln!(out, "Invalid choice. Please enter 'Y' or 'N'.")?,
        }
    }
}

pub fn choose_color<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<CardColor>> {
    writeln!(out, "Choose the color for the next play:")?;
    for (index, color) in CardColor::iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, color)?;
    }

    loop {
        let Some(answer) = prompt(input, out, "Enter your choice: ")? else {
            return Ok(None);
        };
        let choice = answer
            .parse::<usize>()
            .ok()
            .and_then(|number| CardColor::iter().nth(number.checked_sub(1)?));
        match choice {
            Some(color) => return Ok(Some(color)),
            None => writeln!(out, "Invalid choice. Please enter a number between 1 and 4.")?,
        }
    }
}
