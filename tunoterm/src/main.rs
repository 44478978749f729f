mod input;
mod session;

use std::io::{self, BufRead, Write};

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&mut stdin.lock(), &mut stdout.lock())
}

// Finished or abandoned matches come back here; only the exit choice leaves.
fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to Uno Game!")?;

    loop {
        writeln!(out, "\nMenu:")?;
        writeln!(out, "1. Play Game")?;
        writeln!(out, "2. Instructions")?;
        writeln!(out, "3. Credits")?;
        writeln!(out, "4. Exit")?;

        let Some(choice) = input::prompt(input, out, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => session::run(input, out)?,
            "2" => show_instructions(out)?,
            "3" => show_credits(out)?,
            "4" => {
                writeln!(out, "Exiting the game. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter a number between 1 and 4.")?,
        }
    }
}

fn show_instructions<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nInstructions:")?;
    writeln!(
        out,
        "1. The goal of the game is to be the first player to get rid of all your cards."
    )?;
    writeln!(
        out,
        "2. On your turn, play a card that matches the top card by color or type, or draw a card."
    )?;
    writeln!(
        out,
        "3. If you cannot play a card, or do not want to, type 'draw' to draw one from the deck."
    )?;
    writeln!(
        out,
        "4. Number cards are played by typing the color followed by the number, e.g. 'red 4'."
    )?;
    writeln!(
        out,
        "5. Colored action cards: 'draw' for draw two, 'skip' to skip and 'reverse' to reverse, e.g. 'blue skip'."
    )?;
    writeln!(
        out,
        "6. Wild cards are played as 'special wild' or 'special wilddraw'."
    )?;
    Ok(())
}

fn show_credits<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nCredits:")?;
    writeln!(out, "A terminal rendition of the classic Uno card game.")?;
    writeln!(out, "Built on the tuno engine crate in this workspace.")?;
    Ok(())
}
