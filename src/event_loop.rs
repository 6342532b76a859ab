use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::input::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The synchronous loop that drives the UI thread: poll the driver,
/// dispatch to the handler, repeat. The handler receives `None` when
/// the poll interval elapses without input, which is when the app
/// redraws.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain the queued burst before the next draw. Mouse
                // drags arrive faster than frames render; one event per
                // poll would let the gesture fall behind the pointer.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
