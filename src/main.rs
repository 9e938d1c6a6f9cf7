use std::io;

use clap::Parser;

use fmsh::config::Settings;
use fmsh::error::ShellError;
use fmsh::flags::Flags;
use fmsh::input::EditorSource;
use fmsh::logging;
use fmsh::shell::{Shell, INTERRUPT_HINT};

fn main() -> Result<(), ShellError> {
    let flags = Flags::parse();
    let settings = Settings::from_flags(&flags)?;
    logging::init(&settings);

    // Ctrl-C while a handler runs must not kill the shell
    ctrlc::set_handler(move || {
        println!("\n{}", INTERRUPT_HINT);
    })?;

    let source = EditorSource::new(settings.editor_helper)?;
    let mut shell = Shell::new(source, io::stdout(), settings.start_dir);
    shell.run()
}
