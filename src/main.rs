#![allow(nonstandard_style)]

mod error_handling;
mod evaluating;
mod formatting;
mod parsing;
mod scanning;
mod session;

use session::*;

fn main() {
    env_logger::init();
    Session::new(StdConsole).run();
}
