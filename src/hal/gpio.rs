//! GPIO Abstractions
//!
//! Input pins sampled at bring-up. The serial lines themselves are
//! driven through [`super::lines::PinLines`].

use embassy_stm32::gpio::Input;

/// Configuration switch state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchState {
    /// Switch closed (pin pulled to ground)
    On,
    /// Switch open
    Off,
}

impl defmt::Format for SwitchState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::On => defmt::write!(f, "ON"),
            Self::Off => defmt::write!(f, "OFF"),
        }
    }
}

/// Configuration switch input (active low with internal pull-up)
pub struct ConfigSwitch<'d> {
    pin: Input<'d>,
}

impl<'d> ConfigSwitch<'d> {
    /// Wrap a pulled-up input
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Sample the switch
    #[must_use]
    pub fn state(&self) -> SwitchState {
        if self.pin.is_low() {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }
}
