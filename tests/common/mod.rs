use chartwiz::{ColumnCatalog, Command, Configurator, Event, Outcome};

/// Columns A (numeric), B (text), C (numeric): the canonical fixture for
/// wizard walkthroughs.
pub fn abc_catalog() -> ColumnCatalog {
    ColumnCatalog::new([
        ("A".to_string(), true),
        ("B".to_string(), false),
        ("C".to_string(), true),
    ])
}

pub fn wizard() -> Configurator {
    Configurator::new(abc_catalog())
}

/// Press a button or submit typed input; panics on any error.
pub fn press(wizard: &mut Configurator, value: &str) -> Outcome {
    wizard
        .update(&Event::value(value))
        .unwrap_or_else(|err| panic!("step \"{value}\" failed: {err}"))
}

/// Send a command event; panics on any error.
pub fn send(wizard: &mut Configurator, command: Command) -> Outcome {
    wizard
        .update(&Event::command("", command))
        .unwrap_or_else(|err| panic!("command {command:?} failed: {err}"))
}
