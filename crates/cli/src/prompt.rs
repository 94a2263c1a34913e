//! Line-oriented prompts for the console.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use menagerie_core::{DomainError, InventoryNumber};
use menagerie_zoo::{Animal, Family, Kindness, Species};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input ran out before the question was answered.
    #[error("input closed")]
    Closed,

    #[error("{field} must be a whole number (got {input:?})")]
    NotANumber { field: &'static str, input: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Read one line without its line terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, PromptError> {
    write!(output, "{question}: ")?;
    output.flush()?;
    read_line(input)?.ok_or(PromptError::Closed)
}

pub fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    field: &'static str,
) -> Result<i32, PromptError> {
    let answer = ask(input, output, question)?;
    answer
        .trim()
        .parse()
        .map_err(|_| PromptError::NotANumber {
            field,
            input: answer,
        })
}

/// Walk the user through describing an animal.
///
/// Kindness is only asked for herbivores. The animal is not health-checked
/// here.
pub fn ask_animal<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Animal, PromptError> {
    let species: Species = ask(input, output, "Animal type (Monkey, Rabbit, Tiger, Wolf)")?.parse()?;
    let name = ask(input, output, "Name")?;
    let food = ask_number(input, output, "Food intake (kg/day)", "food intake")?;
    let number: InventoryNumber = ask(input, output, "Inventory number")?.parse()?;
    let kindness = match species.family() {
        Family::Herbivore => Some(ask(input, output, "Kindness (1-10)")?.parse::<Kindness>()?),
        Family::Predator => None,
    };

    Ok(Animal::new(species, name.trim(), food, number, kindness)?)
}
