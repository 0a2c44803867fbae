mod app;
mod audio;
mod browse;
mod config;
mod input;
mod library;
mod playback;
mod playlist;
mod runtime;
mod tags;
mod ui;

use runtime::UsageError;

fn main() {
    if let Err(err) = runtime::run() {
        if err.downcast_ref::<UsageError>().is_some() {
            eprintln!("{err}");
            std::process::exit(2);
        }
        eprintln!("cubeplayer: {err}");
        std::process::exit(1);
    }
}
