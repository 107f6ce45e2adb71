// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated board for running demos on a host

use super::Board;
use crate::adc::SweepAdc;
use crate::output::{LogOutput, PinId};
use crate::pwm::LogPwm;
use crate::traced::{TracedAdc, TracedOutput, TracedPwm};

/// Board whose outputs log level changes and whose ADC sweeps a triangle wave
#[derive(Clone, Debug)]
pub struct SimBoard {
    sweep_step: u16,
}

impl SimBoard {
    pub fn new(sweep_step: u16) -> Self {
        Self { sweep_step }
    }
}

impl Board for SimBoard {
    type Output = TracedOutput<LogOutput>;
    type Pwm = TracedPwm<LogPwm>;
    type Adc = TracedAdc<SweepAdc>;

    fn output(&self, pin: PinId, label: &str) -> Self::Output {
        tracing::debug!(%pin, label, "configured output");
        TracedOutput::new(LogOutput::new(pin, label))
    }

    fn pwm(&self, channel: u8, pin: PinId) -> Self::Pwm {
        tracing::debug!(channel, %pin, "configured pwm");
        TracedPwm::new(LogPwm::new(channel, pin))
    }

    fn adc(&self, channel: u8) -> Self::Adc {
        tracing::debug!(channel, step = self.sweep_step, "configured adc");
        TracedAdc::new(SweepAdc::new(channel, self.sweep_step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdcChannel, DigitalOutput, PwmChannel};

    #[test]
    fn hands_out_working_capabilities() {
        let board = SimBoard::new(100);

        let led = board.output(PinId(2), "status");
        led.set_level(true);
        assert!(led.inner().is_high());

        let pwm = board.pwm(0, PinId(33));
        pwm.set_duty(600).unwrap();
        assert_eq!(pwm.inner().duty(), 600);

        let adc = board.adc(4);
        assert_eq!(adc.channel(), 4);
        assert_eq!(adc.read_raw().unwrap(), 0);
        assert_eq!(adc.read_raw().unwrap(), 100);
    }
}
