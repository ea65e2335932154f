#[repr(C)]
#[derive(Clone, Copy)]
pub enum Buttons {
    Up,
    Down,
    Left,
    Right,
    Reset,
    Scale,
}

#[derive(Clone, Copy, Default)]
pub struct ButtonState {
    current: u8,
    previous: u8,
}

impl ButtonState {
    pub fn update(&mut self, current: u8) {
        self.previous = self.current;
        self.current = current;
    }

    pub fn mask(buttons: &[Buttons]) -> u8 {
        buttons
            .iter()
            .fold(0, |acc, &button| acc | (1 << (button as u8)))
    }

    fn pressed(&self) -> u8 {
        self.current & !self.previous
    }

    pub fn is_pressed(&self, button: Buttons) -> bool {
        let mask = 1 << (button as u8);
        (self.pressed() & mask) != 0
    }

    pub fn any_pressed(&self, buttons: &[Buttons]) -> bool {
        (self.pressed() & Self::mask(buttons)) != 0
    }
}
