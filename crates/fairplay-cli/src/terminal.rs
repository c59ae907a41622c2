//! Line-based terminal player channel.

use crate::input::{parse_selection, Selection};
use crate::table;
use fairplay_core::{
    CommitmentAnnouncement, MoveSet, PlayerChannel, PlayerChoice, Result, RoundDisclosure,
    RoundOutcome,
};
use std::io::{self, BufRead, Write};

const MENU_TITLE: &str = "Available moves:";
const MENU_EXIT: &str = "0 - Exit";
const MENU_HELP: &str = "? - Help";
const ENTER_MOVE: &str = "Enter your move: ";
const INVALID_INPUT: &str = "Invalid input. Please enter a valid move number or name.";

/// Reads moves from `input` and writes the game to `output`
pub struct TerminalChannel<R, W> {
    input: R,
    output: W,
    json: bool,
    commitment: Option<String>,
}

impl<R: BufRead, W: Write> TerminalChannel<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            json: false,
            commitment: None,
        }
    }

    /// Also emit announcements and disclosures as JSON lines
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn menu(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.output, "{}", MENU_TITLE)?;
        for (i, label) in moves.iter().enumerate() {
            writeln!(self.output, "{} - {}", i + 1, label)?;
        }
        writeln!(self.output, "{}", MENU_EXIT)?;
        writeln!(self.output, "{}", MENU_HELP)?;
        if let Some(commitment) = &self.commitment {
            writeln!(self.output, "HMAC: {}", commitment)?;
        }
        writeln!(self.output)
    }

    fn help(&mut self, moves: &MoveSet) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Help: outcomes are shown for you (columns) against the computer (rows).")?;
        for line in table::examples(moves) {
            writeln!(self.output, "{}", line)?;
        }
        write!(self.output, "{}", table::render(moves))
    }

    fn json_line<T: serde::Serialize>(&mut self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::from)?;
        writeln!(self.output, "{}", line)
    }
}

impl<R: BufRead, W: Write> PlayerChannel for TerminalChannel<R, W> {
    fn announce(&mut self, moves: &MoveSet, announcement: &CommitmentAnnouncement) -> Result<()> {
        self.commitment = Some(announcement.commitment.to_string());
        self.menu(moves)?;
        if self.json {
            self.json_line(announcement)?;
        }
        Ok(())
    }

    fn choose_move(&mut self, moves: &MoveSet) -> Result<PlayerChoice> {
        loop {
            write!(self.output, "{}", ENTER_MOVE)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // end of input counts as leaving the game
                writeln!(self.output)?;
                return Ok(PlayerChoice::Quit);
            }

            match parse_selection(&line, moves) {
                Selection::Move(label) => return Ok(PlayerChoice::Move(label)),
                Selection::Exit => return Ok(PlayerChoice::Quit),
                Selection::Help => {
                    self.help(moves)?;
                    self.menu(moves)?;
                }
                Selection::Invalid => writeln!(self.output, "{}", INVALID_INPUT)?,
            }
        }
    }

    fn disclose(&mut self, disclosure: &RoundDisclosure) -> Result<()> {
        writeln!(self.output, "Your move: {}", disclosure.player_move)?;
        writeln!(self.output, "Computer move: {}", disclosure.computer_move)?;
        match disclosure.outcome {
            RoundOutcome::Win => writeln!(self.output, "You win!")?,
            RoundOutcome::Lose => writeln!(self.output, "Computer wins!")?,
            RoundOutcome::Draw => writeln!(self.output, "Draw!")?,
        }
        writeln!(self.output, "HMAC key: {}", disclosure.key.to_hex())?;
        if self.json {
            self.json_line(disclosure)?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}
