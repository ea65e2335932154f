use log::{info, warn};
use sprite_core::{
    input::{ButtonState, Buttons},
    panel::{HEIGHT, Panel, WIDTH},
};

const DISPLAY_BUFFER_SIZE: usize = WIDTH * HEIGHT;
const PIXEL_ON: u32 = 0xFFFFFFFF;
const PIXEL_OFF: u32 = 0xFF000000;

/// Desktop window standing in for the OLED panel.
pub struct PanelWindow {
    display_buffer: Box<[u32; DISPLAY_BUFFER_SIZE]>,
    window: minifb::Window,
    buttons: ButtonState,
    scale: minifb::Scale,
}

impl Default for PanelWindow {
    fn default() -> Self {
        Self {
            display_buffer: Box::new([PIXEL_OFF; DISPLAY_BUFFER_SIZE]),
            window: Self::create_window(minifb::Scale::X4),
            buttons: ButtonState::default(),
            scale: minifb::Scale::X4,
        }
    }
}

impl PanelWindow {
    fn create_window(scale: minifb::Scale) -> minifb::Window {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: false,
            scale,
            ..minifb::WindowOptions::default()
        };
        let mut window = minifb::Window::new("Sprite Preview", WIDTH, HEIGHT, options)
            .unwrap_or_else(|e| {
                panic!("Unable to open window: {}", e);
            });

        window.set_target_fps(30);
        window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn update_display(&mut self) {
        if let Err(e) = self
            .window
            .update_with_buffer(&*self.display_buffer, WIDTH, HEIGHT)
        {
            warn!("Failed to update window: {e}");
        }
    }

    /// Polls the window and samples the keys the preview reacts to.
    pub fn update(&mut self) {
        self.window.update();
        let mut current: u8 = 0;
        if self.window.is_key_down(minifb::Key::Up) {
            current |= 1 << (Buttons::Up as u8);
        }
        if self.window.is_key_down(minifb::Key::Down) {
            current |= 1 << (Buttons::Down as u8);
        }
        if self.window.is_key_down(minifb::Key::Left) {
            current |= 1 << (Buttons::Left as u8);
        }
        if self.window.is_key_down(minifb::Key::Right) {
            current |= 1 << (Buttons::Right as u8);
        }
        if self.window.is_key_down(minifb::Key::Enter) {
            current |= 1 << (Buttons::Reset as u8);
        }
        if self.window.is_key_down(minifb::Key::S) {
            current |= 1 << (Buttons::Scale as u8);
        }
        self.buttons.update(current);
        if self.buttons.is_pressed(Buttons::Scale) {
            info!("Toggling scale");
            self.scale = match self.scale {
                minifb::Scale::X2 => minifb::Scale::X4,
                minifb::Scale::X4 => minifb::Scale::X8,
                _ => minifb::Scale::X2,
            };
            self.window = Self::create_window(self.scale);
            self.update_display();
        }
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// Copies the panel's page-organised buffer into the window.
    pub fn show(&mut self, panel: &Panel) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.display_buffer[y * WIDTH + x] =
                    if panel.pixel(x, y) { PIXEL_ON } else { PIXEL_OFF };
            }
        }
        self.update_display();
    }
}
