use clap::Parser;
use drumhid::{
    cli::{choose_device, handle_device_list, validate_device, Args},
    config::Settings,
    logging,
    midi::{DefaultMidiEngine, MidiEngine},
    report::{USB_PRODUCT_ID, USB_VENDOR_ID},
    transport::MonitorTransport,
    EventLoop, MessageMailbox,
};
use std::sync::Arc;

fn main() {
    let args = parse_command_line_arguments();
    let settings = match Settings::load(&args) {
        Ok(settings) => settings,
        Err(e) => fail(&e.to_string()),
    };
    initialize_logging(&settings);
    if let Some(path) = &args.config {
        log::info!("Loaded settings file {}", path.display());
    }
    log::info!("Resolved settings: {:?}", settings);

    let devices = get_available_devices();

    if args.device_list {
        list_available_devices(&devices);
        return;
    }

    let device_name = match &settings.device {
        Some(name) => {
            if let Err(error_msg) = validate_device(name, &devices) {
                fail(&error_msg);
            }
            name.clone()
        }
        None => match choose_device(&devices) {
            Some(name) => name,
            None => fail("No MIDI input devices available"),
        },
    };

    let mailbox = Arc::new(MessageMailbox::new());
    let mut engine = DefaultMidiEngine::new();
    if let Err(e) = engine.open(&device_name, Arc::clone(&mailbox)) {
        fail(&format!("Error connecting to MIDI device: {}", e));
    }
    println!("Successfully connected to MIDI device: {}", device_name);

    // Runs until the process is killed; the connection is not closed on exit.
    run_application_loop(mailbox, &settings);
}

fn initialize_logging(settings: &Settings) {
    let result = if settings.log_to_stderr {
        logging::init_stderr_logger()
    } else {
        logging::init_logger()
    };
    if let Err(e) = result {
        eprintln!("Logger initialization failed: {}", e);
    }
    log::info!("Application starting");
}

fn parse_command_line_arguments() -> Args {
    Args::parse()
}

fn get_available_devices() -> Vec<String> {
    handle_device_list()
}

fn list_available_devices(devices: &[String]) {
    println!("Available MIDI devices:");
    for device in devices {
        println!("  - {}", device);
    }
}

fn run_application_loop(mailbox: Arc<MessageMailbox>, settings: &Settings) {
    let transport = MonitorTransport::stdout(settings.quiet);
    let mut event_loop = EventLoop::new(mailbox, transport, settings.poll_interval);

    log::info!(
        "Delivering reports as {:04X}:{:04X}",
        USB_VENDOR_ID,
        USB_PRODUCT_ID
    );
    log::info!("Application running. Press Ctrl+C to exit...");
    println!("\nPress Ctrl+C to exit...");
    if let Err(e) = event_loop.run() {
        fail(&format!("Report delivery failed: {}", e));
    }
}

fn fail(error_msg: &str) -> ! {
    log::error!("{}", error_msg);
    eprintln!("{}", error_msg);
    std::process::exit(1);
}
