//! WorldClock - iced front end
//!
//! Single window showing:
//! - Today's date
//! - The time at a chosen location (country dropdown or typed timezone)
//! - A greeting button that shows and hides the clock picture

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use iced::widget::image::Handle;
use iced::{keyboard, window, Element, Size, Subscription, Task, Theme};
use log::{debug, info, warn};

use worldclock::config::{Settings, ThemeMode};
use worldclock::{DisplayState, Event};

mod constants;
mod ui;

/// Embedded picture, also used as the window icon
const CLOCK_PNG: &[u8] = include_bytes!("../assets/clock.png");

/// Load the application icon for the window
fn load_app_icon() -> anyhow::Result<window::Icon> {
    use image::ImageReader;
    use std::io::Cursor;

    let img = ImageReader::new(Cursor::new(CLOCK_PNG))
        .with_guessed_format()
        .context("Failed to read icon")?
        .decode()
        .context("Failed to decode icon")?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    window::icon::from_rgba(rgba.into_raw(), width, height).context("Invalid icon data")
}

// ============================================================================
// Application State
// ============================================================================

struct WorldClockApp {
    state: DisplayState,
    theme: ThemeMode,
    // Cached so the image isn't re-decoded on every view
    picture: Handle,
}

impl WorldClockApp {
    fn new(settings: &Settings) -> (Self, Task<Event>) {
        let app = Self {
            state: DisplayState::new(settings.front_end),
            theme: settings.theme,
            picture: Handle::from_bytes(CLOCK_PNG),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "WorldClock".to_string()
    }

    fn update(&mut self, event: Event) -> Task<Event> {
        debug!("Event: {:?}", event);
        self.state.apply(event);
        Task::none()
    }

    fn view(&self) -> Element<'_, Event> {
        ui::view(&self.state, &self.picture)
    }

    fn subscription(&self) -> Subscription<Event> {
        keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Event::DismissDropdown),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        ui::theme::theme(self.theme)
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> iced::Result {
    // Initialize logger with wgpu warnings filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .filter_module("naga", log::LevelFilter::Error)
        .init();

    let mut settings = Settings::load();
    settings.apply_args(std::env::args().skip(1));
    info!(
        "WorldClock starting, front end: {:?}, theme: {:?}",
        settings.front_end, settings.theme
    );

    let icon = match load_app_icon() {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    };

    let window_settings = window::Settings {
        size: Size::new(settings.window_width as f32, settings.window_height as f32),
        min_size: Some(Size::new(
            constants::window::MIN_WIDTH as f32,
            constants::window::MIN_HEIGHT as f32,
        )),
        icon,
        ..Default::default()
    };

    iced::application(WorldClockApp::title, WorldClockApp::update, WorldClockApp::view)
        .subscription(WorldClockApp::subscription)
        .theme(WorldClockApp::theme)
        .window(window_settings)
        .run_with(move || WorldClockApp::new(&settings))
}
