/// Hardware seam between the controller and whatever drives the lamps
use crate::core::controller::Snapshot;
use crate::core::slot::{Level, Slot};
use anyhow::Result;

/// Lamps, buttons and the spare analog pin
pub trait Board {
    /// Drive the lamp bound to `slot`.
    fn set_indicator(&mut self, slot: Slot, level: Level);

    /// Read the button bound to `slot`. `Low` means pressed.
    fn read_sensor(&mut self, slot: Slot) -> Level;

    /// Reading from an otherwise unused analog input, used only as a seed.
    fn read_entropy(&mut self) -> u16;
}

/// Newline-delimited text link to the host
pub trait TextChannel {
    /// Configure the fixed symbol rate. Most backends ignore it.
    fn open(&mut self, _baud: u32) {}

    /// Next inbound byte, if one is already available. Never blocks.
    fn read_byte(&mut self) -> Option<u8>;

    /// Send one line; the implementation appends the line terminator.
    fn write_line(&mut self, line: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything the engine loop needs from its environment
pub trait Host: Board + TextChannel {
    /// Called once per loop iteration before the controller runs.
    /// Pumps UI events and redraws; hardware hosts just return `Continue`.
    fn service(&mut self, view: &Snapshot) -> Result<Control>;

    /// Called after a transition has switched the old lamp off and reported
    /// the new slot, right before the settle pause. Hosts with a display
    /// redraw here so the dark, reported state is visible during the pause.
    fn present(&mut self, _view: &Snapshot) -> Result<()> {
        Ok(())
    }
}
