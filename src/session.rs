use crate::error_handling::*;
use crate::evaluating::*;
use crate::formatting::*;
use crate::parsing::*;

use log::{debug, info};
use std::io::Write;

const TITLE: &str = "Welcome to Menucalc 1.0!";
const GOODBYE: &str = "Menucalc says \"Peace out!\"";
const SELECT_PROMPT: &str = "Please select an option number or leave blank to quit: ";
const SETTINGS_PROMPT: &str = "Enter default number of decimals [0-4]: ";

pub trait Console {
    fn clear(&mut self);
    fn print_line(&mut self, line: &str);
    // Returns None once input runs out.
    fn prompt(&mut self, text: &str) -> Option<String>;
}

pub struct StdConsole;

impl Console for StdConsole {
    fn clear(&mut self) {
        print!("\x1b[2J\x1b[1;1H");
        let _ = std::io::stdout().flush();
    }

    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}

pub struct Session<C: Console> {
    console: C,
    default_decimals: usize,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            default_decimals: 2,
        }
    }

    pub fn run(&mut self) {
        self.show_menu();
        let item_count = Operation::ALL.len() + 1;

        loop {
            let reply = self.console.prompt(SELECT_PROMPT).unwrap_or_default();
            if reply.is_empty() {
                self.console.print_line(GOODBYE);
                return;
            }

            if !reply.chars().all(|character| character.is_ascii_digit()) {
                self.print_error(CalcError::selection_hint(item_count));
                continue;
            }

            match reply.parse::<usize>() {
                Ok(selection) => self.dispatch(selection, item_count, &reply),
                // Digit strings too long for usize are still no selection.
                Err(_) => self.print_error(CalcError::invalid_selection(reply)),
            }
        }
    }

    fn dispatch(&mut self, selection: usize, item_count: usize, reply: &str) {
        match Operation::from_selection(selection) {
            Some(operation) => {
                debug!("dispatching {}", operation.symbol());
                self.console
                    .print_line(&format!("You selected {}!", operation.label()));
                self.console.print_line("");
                self.operate(operation);
            }
            None if selection == item_count => self.settings(),
            None => self.print_error(CalcError::invalid_selection(reply.to_string())),
        }
    }

    fn operate(&mut self, operation: Operation) {
        let reply = self.console.prompt(operation.prompt()).unwrap_or_default();
        let input = reply.to_lowercase();
        if input.is_empty() {
            self.print_error(CalcError::input_absent);
            return;
        }

        let operands = match parse(&input, operation) {
            Ok(operands) => operands,
            Err(rejections) => {
                for rejection in rejections {
                    self.print_error(rejection);
                }
                return;
            }
        };

        match evaluate(operation, &operands) {
            Ok(answer) => {
                let answer = format_answer(answer, self.default_decimals);
                self.console.print_line(&format!("Answer: {answer}"));
            }
            Err(rejection) => self.print_error(rejection),
        }
    }

    fn settings(&mut self) {
        let reply = self.console.prompt(SETTINGS_PROMPT).unwrap_or_default();
        match reply.trim().parse::<i64>() {
            Err(_) => self.print_error(CalcError::decimals_not_a_number),
            Ok(decimals) if (0..=4).contains(&decimals) => {
                self.default_decimals = decimals as usize;
                info!("default decimals set to {decimals}");
                self.console
                    .print_line(&format!("Default decimals is {decimals}."));
            }
            Ok(_) => self.print_error(CalcError::decimals_out_of_range),
        }
    }

    fn show_menu(&mut self) {
        self.console.clear();
        self.console.print_line(TITLE);
        self.console.print_line(&"-".repeat(TITLE.len()));
        self.console.print_line("");

        for (index, operation) in Operation::ALL.iter().enumerate() {
            self.console
                .print_line(&format!("{} - {}", index + 1, operation.label()));
        }
        self.console
            .print_line(&format!("{} - Settings", Operation::ALL.len() + 1));
        self.console.print_line("");
    }

    fn print_error(&mut self, error: CalcError) {
        self.console.print_line(&error.to_string());
    }
}
