//! Typed pipeline steps produced by the directive parser.

use std::fmt;

/// An RGB triple, as given by the `bHHHHHH` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// How far a `q` directive reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitScope {
    /// `q` - stop the current file without saving it.
    File,
    /// `qq` - stop the whole run.
    All,
}

/// One parsed pipeline step. Operations run strictly in list order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// `i`
    Invert,
    /// `tNNN` - channel values at or below the level become 0.
    Threshold(u8),
    /// `rNNN` - scale factor, already divided by 100. Always `> 0`.
    Resize(f64),
    /// `bHHHHHH`
    SetBackground(Rgb),
    /// `v`
    View,
    /// `q` / `qq`
    Quit(QuitScope),
    /// `h` / `?` - help is printed while parsing; this step does nothing when run.
    Help,
}
