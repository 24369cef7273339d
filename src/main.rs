use brewstate::config::MachineConfig;
use brewstate::input::TerminalInput;
use brewstate::machine::Controller;
use brewstate::observability::init_tracing;
use brewstate::status::StdoutSink;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let input = TerminalInput::new()?;
    Controller::new(MachineConfig::default(), input, StdoutSink)?.run()
}
