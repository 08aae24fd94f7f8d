mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::player_name::generate_player_name;
use common::version::VERSION;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{get_config_manager, resolve_config_path};
use offline::{local_task, LocalTaskSettings};
use state::{ClientCommand, CommandSender, SharedState};
use ui::HomepageApp;

#[derive(Parser)]
#[command(name = "homepage_desktop")]
struct Args {
    /// Config file; defaults to homepage_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Homepage".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);
    log!("Homepage {} starting", VERSION);

    let config_path = resolve_config_path(args.config.as_deref());
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    log!("Loaded config from {}", config_path);

    let player_name = match config.player_name.clone() {
        Some(name) => name,
        None => {
            let name = generate_player_name();
            match config_manager.update_config(|c| c.player_name = Some(name.clone())) {
                Ok(updated) => config = updated,
                Err(e) => log!("Failed to save player name: {}", e),
            }
            name
        }
    };
    log!("Playing as {}", player_name);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);

    let settings = LocalTaskSettings::from_config(&config, player_name);
    let shared_state_clone = shared_state.clone();

    let runtime_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start tokio runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start background runtime: {}", e));
                return;
            }
        };
        rt.block_on(local_task(shared_state_clone, settings, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_title(format!("Homepage v{}", VERSION)),
        ..Default::default()
    };

    let app_command_sender = command_sender.clone();
    eframe::run_native(
        "Homepage",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(HomepageApp::new(
                shared_state,
                app_command_sender,
                config_manager,
                config_path,
                config,
            )))
        }),
    )?;

    command_sender.send(ClientCommand::Shutdown);
    let _ = runtime_thread.join();
    log!("Homepage closed");

    Ok(())
}
