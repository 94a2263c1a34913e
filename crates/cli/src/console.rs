//! Interactive menu loop.

use std::fmt::Display;
use std::io::{BufRead, Write};

use serde::Serialize;

use menagerie_core::{DomainError, Inventoried};
use menagerie_zoo::{
    AnimalReport, ContactZooReport, HealthCheck, InventoryReport, VeterinaryClinic, Zoo,
};

use crate::config::ReportFormat;
use crate::prompt::{self, PromptError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddAnimal,
    AnimalReport,
    ContactZooReport,
    Inventory,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddAnimal),
            "2" => Some(Self::AnimalReport),
            "3" => Some(Self::ContactZooReport),
            "4" => Some(Self::Inventory),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Zoo menu ---\n\
1. Add animal\n\
2. Print animal report\n\
3. Show contact zoo animals\n\
4. Print inventory\n\
5. Exit";

/// What the menu loop should do after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    InputClosed,
}

/// Menu-driven console over any line reader and writer.
pub struct Console<R, W, C = VeterinaryClinic> {
    input: R,
    output: W,
    zoo: Zoo<C>,
    report_format: ReportFormat,
}

impl<R, W, C> Console<R, W, C>
where
    R: BufRead,
    W: Write,
    C: HealthCheck,
{
    pub fn new(input: R, output: W, zoo: Zoo<C>, report_format: ReportFormat) -> Self {
        Self {
            input,
            output,
            zoo,
            report_format,
        }
    }

    pub fn zoo(&self) -> &Zoo<C> {
        &self.zoo
    }

    pub fn into_parts(self) -> (Zoo<C>, W) {
        (self.zoo, self.output)
    }

    /// Loop until the user exits or input ends.
    ///
    /// Bad user input is reported on the console and the loop continues; only
    /// IO failures and serialization errors escape.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            write!(self.output, "Choose an action: ")?;
            self.output.flush()?;

            let Some(line) = prompt::read_line(&mut self.input)? else {
                tracing::debug!("input closed, leaving menu");
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddAnimal) => {
                    if self.add_animal()? == Flow::InputClosed {
                        tracing::debug!("input closed mid-form, leaving menu");
                        writeln!(self.output)?;
                        return Ok(());
                    }
                }
                Some(MenuChoice::AnimalReport) => {
                    let report = AnimalReport::from_zoo(&self.zoo);
                    self.print_report(&report)?;
                }
                Some(MenuChoice::ContactZooReport) => {
                    let report = ContactZooReport::from_zoo(&self.zoo);
                    self.print_report(&report)?;
                }
                Some(MenuChoice::Inventory) => {
                    let report = InventoryReport::from_zoo(&self.zoo);
                    self.print_report(&report)?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                None => {
                    tracing::debug!(choice = %line, "unrecognised menu choice");
                    writeln!(self.output, "Invalid choice, try again.")?;
                }
            }
        }
    }

    /// Admit the animal described on the console and, on success, register
    /// it on the inventory.
    fn add_animal(&mut self) -> anyhow::Result<Flow> {
        let animal = match prompt::ask_animal(&mut self.input, &mut self.output) {
            Ok(animal) => animal,
            Err(PromptError::Io(err)) => return Err(err.into()),
            Err(PromptError::Closed) => return Ok(Flow::InputClosed),
            Err(PromptError::Domain(DomainError::UnknownSpecies(species))) => {
                tracing::debug!(%species, "unknown species requested");
                writeln!(
                    self.output,
                    "Unknown animal type {species:?}. Choose Monkey, Rabbit, Tiger or Wolf."
                )?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                tracing::debug!(error = %err, "animal form rejected");
                writeln!(self.output, "Invalid input: {err}")?;
                return Ok(Flow::Continue);
            }
        };

        let name = animal.name().to_string();
        let species = animal.species();
        match self.zoo.admit(animal.clone()) {
            Ok(()) => {
                self.zoo.add_inventory_item(animal);
                tracing::info!(%name, %species, "animal admitted");
                writeln!(self.output, "Animal {name} admitted to the zoo.")?;
            }
            Err(err) => {
                tracing::info!(%name, %species, error = %err, "animal turned away");
                writeln!(self.output, "Animal {name} failed the health check.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_report<T>(&mut self, report: &T) -> anyhow::Result<()>
    where
        T: Display + Serialize,
    {
        match self.report_format {
            ReportFormat::Text => writeln!(self.output, "{report}")?,
            ReportFormat::Json => writeln!(self.output, "{}", serde_json::to_string_pretty(report)?)?,
        }
        Ok(())
    }
}
