//! Async host for a [`Carousel`].
//!
//! The carousel runs inside a tokio task that sleeps until its next timer
//! deadline or the next command, whichever comes first. Every processed
//! command or timer publishes a fresh [`CarouselView`] on a watch channel.

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::carousel::{Carousel, CarouselEvent, CarouselView};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("carousel driver has stopped")]
    Closed,

    #[error("carousel driver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug)]
enum DriverCommand {
    Event(CarouselEvent),
    Shutdown,
}

/// Handle to a running driver task.
pub struct CarouselDriver {
    commands: mpsc::Sender<DriverCommand>,
    view: watch::Receiver<CarouselView>,
    task: JoinHandle<Carousel>,
}

impl CarouselDriver {
    /// Mount `carousel` at `width` and start driving it on the current runtime.
    pub fn spawn(mut carousel: Carousel, width: u32) -> Self {
        carousel.setup(width, Instant::now().into_std());
        let (view_tx, view) = watch::channel(carousel.view());
        let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(drive(carousel, rx, view_tx));
        Self {
            commands,
            view,
            task,
        }
    }

    pub async fn send(&self, event: CarouselEvent) -> Result<(), DriverError> {
        self.commands
            .send(DriverCommand::Event(event))
            .await
            .map_err(|_| DriverError::Closed)
    }

    /// Subscribe to render snapshots.
    pub fn view(&self) -> watch::Receiver<CarouselView> {
        self.view.clone()
    }

    /// Stop the task and hand back the unmounted carousel.
    pub async fn shutdown(self) -> Result<Carousel, DriverError> {
        // The task also stops when every sender is gone.
        let _ = self.commands.send(DriverCommand::Shutdown).await;
        drop(self.commands);
        Ok(self.task.await?)
    }
}

async fn drive(
    mut carousel: Carousel,
    mut rx: mpsc::Receiver<DriverCommand>,
    view_tx: watch::Sender<CarouselView>,
) -> Carousel {
    tracing::debug!("Carousel driver started");
    loop {
        let deadline = carousel.next_deadline();
        tokio::select! {
            command = rx.recv() => match command {
                Some(DriverCommand::Event(event)) => {
                    let now = Instant::now().into_std();
                    carousel.handle(event, now);
                    carousel.advance(now);
                }
                Some(DriverCommand::Shutdown) | None => break,
            },
            _ = sleep_until(deadline) => {
                carousel.advance(Instant::now().into_std());
            }
        }
        view_tx.send_replace(carousel.view());
    }

    carousel.teardown();
    view_tx.send_replace(carousel.view());
    tracing::debug!("Carousel driver stopped");
    carousel
}

async fn sleep_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
