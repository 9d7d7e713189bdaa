//! albert - a minimal terminal code editor with a file tree

use anyhow::Result;
use clap::Parser;

use albert::cli::CliArgs;
use albert::config::EditorConfig;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config();

    let _logging = albert::tracing::init(startup.log_stderr);

    let mut config = EditorConfig::load();
    startup.apply_to(&mut config);
    tracing::debug!("Startup: {:?}, dialogs: {:?}", startup.mode, config.dialogs);

    App::new(config, startup.startup_path())?.run()
}
