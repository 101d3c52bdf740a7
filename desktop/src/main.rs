use std::{net::SocketAddr, path::PathBuf, time::Instant};

use argh::FromArgs;
use badge_core::{
    application::Application,
    config::{Config, DEFAULT_APP_NAME},
    framebuffer::DisplayBuffers,
};

use crate::minifb_display::MinifbDisplay;
use crate::peripherals::{Contact, LogBuzzer, StaticContacts, parse_badge_id};
use crate::std_fs::StdFilesystem;
use crate::udp_radio::UdpRadio;

mod minifb_display;
mod peripherals;
mod std_fs;
mod udp_radio;

#[derive(FromArgs)]
/// Emoji badge simulator
struct Args {
    /// directory holding the `apps/` tree of the badge
    #[argh(option, default = "PathBuf::from(\"sd\")")]
    sd: PathBuf,

    /// application name, selects `apps/<name>/assets`
    #[argh(option, default = "String::from(DEFAULT_APP_NAME)")]
    app_name: String,

    /// own handle, sent along with every emoji
    #[argh(option)]
    handle: Option<String>,

    /// badge id in hex
    #[argh(option, default = "1", from_str_fn(parse_badge_id))]
    badge_id: u16,

    /// local UDP address of the simulated radio
    #[argh(option, default = "SocketAddr::from(([127, 0, 0, 1], 4210))")]
    listen: SocketAddr,

    /// UDP address of another simulator, may be repeated
    #[argh(option)]
    peer: Vec<SocketAddr>,

    /// known badge as `<hex id>=<handle>`, may be repeated
    #[argh(option)]
    contact: Vec<Contact>,

    /// seconds before a received emoji is closed
    #[argh(option)]
    auto_dismiss: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    log::info!("Emoji badge desktop application started");

    let mut config = Config::default().with_app_name(&args.app_name);
    if let Some(secs) = args.auto_dismiss {
        config.auto_dismiss = std::time::Duration::from_secs(secs);
    }
    let tick = config.tick;

    let radio = UdpRadio::bind(args.listen, args.badge_id, args.peer)
        .expect("Failed to bind radio socket");
    let contacts = StaticContacts::new(args.handle, args.contact);
    let filesystem = StdFilesystem::new_with_base_path(args.sd);

    let mut display_buffers = Box::new(DisplayBuffers::default());
    let title = format!("{} [{:04X}]", args.app_name, args.badge_id);
    let mut display = MinifbDisplay::new(&title);
    let mut application = Application::new(
        &mut display_buffers,
        filesystem,
        radio,
        contacts,
        LogBuzzer,
        config,
    );

    let boot = Instant::now();
    while display.is_open() && application.running() {
        display.update();
        application.update(&display.get_buttons(), boot.elapsed());
        application.draw(&mut display);
        std::thread::sleep(tick);
    }
}
