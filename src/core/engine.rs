use crate::core::board::{Control, Host};
use crate::core::controller::Controller;
use anyhow::Result;
use std::time::Instant;
use tracing::info;

/// Single cooperative polling loop around one controller and one host
pub struct Engine<H: Host> {
    controller: Controller,
    host: H,
}

impl<H: Host> Engine<H> {
    pub fn new(controller: Controller, host: H) -> Self {
        Self { controller, host }
    }

    /// Runs until the host asks to quit and hands the host back.
    pub async fn run(mut self) -> Result<H> {
        let settle = self.controller.config().settle();
        let poll = self.controller.config().poll_interval();

        loop {
            if self.host.service(&self.controller.snapshot())? == Control::Quit {
                info!("host requested shutdown");
                break;
            }

            if let Some(transition) = self.controller.step(&mut self.host, Instant::now()) {
                self.host.present(&self.controller.snapshot())?;
                // Nothing else runs during the settle pause.
                tokio::time::sleep(settle).await;
                self.controller.activate(&mut self.host, &transition);
            }

            if poll.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(poll).await;
            }
        }

        Ok(self.host)
    }
}
