use anyhow::Result;
use log::info;
use pad_controls::{scheme, InputManager, InputSettings, PlayerSlot, WinitBackend};
use std::collections::HashMap;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting pad-controls demo...");

    let settings = InputSettings::default();
    let mut input = InputManager::with_settings(WinitBackend::new(&settings), settings);
    input.bind_all_from(scheme::default_scheme());
    // Player four has no pad in this demo; drive them from WASD
    for (name, control) in scheme::keyboard_scheme() {
        input.bind(PlayerSlot::Four, name, control);
    }

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("pad-controls demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut last_values: HashMap<(PlayerSlot, String), f32> = HashMap::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                input.update();
                report_changes(&input, &mut last_values);
                if input.any_player_active("Pause") {
                    info!("Pause pressed, shutting down...");
                    elwt.exit();
                }
            }
            Event::WindowEvent { event, .. } => {
                input.backend_mut().handle_window_event(&event);
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Log every control whose value changed since the last frame
fn report_changes(
    input: &InputManager<WinitBackend>,
    last_values: &mut HashMap<(PlayerSlot, String), f32>,
) {
    for player in PlayerSlot::ALL {
        for name in input.control_names(player) {
            let Ok(value) = input.control_state(player, name) else {
                continue;
            };
            let previous = last_values.insert((player, name.to_string()), value);
            if previous.map_or(value != 0.0, |p| p != value) {
                info!("{} {} = {:.2}", player, name, value);
            }
        }
    }
}
