//! RGB colour of a single addressable LED.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// LED off. Never used as a drawable colour.
    pub const NO_COLOR: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const PURPLE: Rgb = Rgb::new(185, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn is_off(&self) -> bool {
        *self == Rgb::NO_COLOR
    }

    /// Wire order of WS2812-style strings: green, red, blue.
    pub const fn grb(&self) -> [u8; 3] {
        [self.green, self.red, self.blue]
    }
}
