use std::io::{self, IsTerminal};

use flowdiag_core::{BookingLink, Config};

use crate::render;

pub fn run(print_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let link = BookingLink::from_config(&config.booking)?;
    render::init_color(&config.display, io::stdout().is_terminal());
    render::booking_link(&mut io::stdout().lock(), &link)?;
    if !print_only {
        link.open()?;
    }
    Ok(())
}
