use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use chunker_core::{update, AppState, Msg};
use chunker_logging::{chunker_debug, chunker_info};
use clap::Parser;

use super::config::{AppConfig, Args};
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::{logging, ui};

/// Everything the main loop reacts to: user commands and engine completions.
#[derive(Debug)]
pub enum AppInput {
    Command(Command),
    Msg(Msg),
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args)?;
    logging::initialize(config.log, config.log_level(), &config.log_file)?;
    chunker_info!("Starting chunker, backend {}", config.backend_url);

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(config.client_settings(), input_tx.clone())?;
    spawn_stdin_reader(input_tx);

    let mut state = AppState::new();
    print!("{}", ui::render::render(&state.view()));
    println!("Type `help` for commands.");

    while let Ok(input) = input_rx.recv() {
        match input {
            AppInput::Msg(msg) => dispatch_msg(&mut state, &runner, msg),
            AppInput::Command(Command::Dispatch(msgs)) => {
                for msg in msgs {
                    dispatch_msg(&mut state, &runner, msg);
                }
            }
            AppInput::Command(Command::Show) => print!("{}", ui::render::render(&state.view())),
            AppInput::Command(Command::Help) => println!("{}", input::HELP),
            AppInput::Command(Command::Invalid(text)) => println!("{text}"),
            AppInput::Command(Command::Quit) => break,
        }
    }

    chunker_info!("Exiting chunker");
    Ok(())
}

fn dispatch_msg(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    chunker_debug!("dispatch {:?}", msg);
    let (mut next, effects) = update(std::mem::take(state), msg);
    runner.run(effects);
    if next.consume_dirty() {
        print!("{}", ui::render::render(&next.view()));
    }
    *state = next;
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx
                .send(AppInput::Command(input::parse_line(&line)))
                .is_err()
            {
                return;
            }
        }
        // End of input behaves like `quit`.
        let _ = input_tx.send(AppInput::Command(Command::Quit));
    });
}
